//! Resource/domain registry.
//!
//! Holds the catalog and answers domain, resource and tier queries. Lookup
//! tables are derived lazily: the first query builds the index exactly once,
//! every later query is a pure read. A registry is an explicit value; tests and
//! sessions construct their own instead of sharing process-global state.

mod categories;
mod index;
mod scoring;
mod use_cases;

pub use categories::{CategoryCount, CategoryGrouping};
pub use scoring::{WorkflowSuggestion, MAX_RELATED_DOMAINS, MAX_WORKFLOW_SUGGESTIONS};
pub use use_cases::{UseCaseMatch, UseCaseStatistics};

use crate::catalog::{DomainInfo, ResourceType, Workflow};
use crate::error::RegistryError;
use crate::tier::{self, Tier};
use index::{DomainIndex, LazyIndex};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Registry of resource types, domains and workflows
#[derive(Debug, Default)]
pub struct Registry {
    resources: HashMap<String, ResourceType>,
    domains: HashMap<String, DomainInfo>,
    workflows: Vec<Workflow>,
    index: LazyIndex,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain.
    ///
    /// Fails when the domain's name or any alias is already claimed by another
    /// domain, or when the index has already been built.
    pub fn register_domain(&mut self, info: DomainInfo) -> Result<(), RegistryError> {
        if self.index.is_built() {
            return Err(RegistryError::Sealed(info.name));
        }

        {
            let mut own = BTreeSet::new();
            for name in info.names() {
                if !own.insert(name) {
                    return Err(RegistryError::DuplicateDomainName {
                        name: name.to_string(),
                        existing: info.name.clone(),
                    });
                }
                if let Some(existing) = self.claimed_by(name) {
                    return Err(RegistryError::DuplicateDomainName {
                        name: name.to_string(),
                        existing: existing.to_string(),
                    });
                }
            }
        }

        self.domains.insert(info.name.clone(), info);
        Ok(())
    }

    /// Register a resource type.
    ///
    /// Every domain the resource lists must already be registered.
    pub fn register(&mut self, resource: ResourceType) -> Result<(), RegistryError> {
        if self.index.is_built() {
            return Err(RegistryError::Sealed(resource.name));
        }
        if self.resources.contains_key(&resource.name) {
            return Err(RegistryError::DuplicateResource(resource.name));
        }
        if !resource.domains.contains(&resource.primary_domain) {
            return Err(RegistryError::PrimaryDomainNotMember {
                resource: resource.name,
                primary: resource.primary_domain,
            });
        }
        if let Some(unknown) = resource
            .domains
            .iter()
            .find(|d| !self.domains.contains_key(d.as_str()))
        {
            return Err(RegistryError::UnknownDomainReference {
                resource: resource.name.clone(),
                domain: unknown.clone(),
            });
        }

        self.resources.insert(resource.name.clone(), resource);
        Ok(())
    }

    /// Register a workflow. Workflows only feed suggestion scoring.
    pub fn register_workflow(&mut self, workflow: Workflow) {
        self.workflows.push(workflow);
    }

    /// Check externally supplied custom domain names against every generated
    /// name and alias, and against each other.
    pub fn validate_custom_domains<'a, I>(&self, names: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = BTreeSet::new();
        for name in names {
            if let Some(existing) = self.claimed_by(name) {
                return Err(RegistryError::DuplicateDomainName {
                    name: name.to_string(),
                    existing: existing.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateDomainName {
                    name: name.to_string(),
                    existing: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Canonical domain claiming `name`, scanning the domain table.
    /// Used at load time, before the index exists.
    fn claimed_by(&self, name: &str) -> Option<&str> {
        self.domains
            .values()
            .find(|d| d.names().any(|n| n == name))
            .map(|d| d.name.as_str())
    }

    fn index(&self) -> Arc<DomainIndex> {
        self.index
            .get_or_build(|| DomainIndex::build(&self.domains, &self.resources))
    }

    /// Number of times the lookup index has been built (0 before the first query, 1 after).
    pub fn index_build_count(&self) -> usize {
        self.index.build_count()
    }

    /// Resolve a canonical name or alias to the canonical domain name.
    pub fn resolve_domain(&self, name_or_alias: &str) -> Option<&str> {
        let index = self.index();
        let canonical = index.aliases.get(name_or_alias)?;
        self.domains.get(canonical).map(|d| d.name.as_str())
    }

    /// Domain metadata by canonical name or alias.
    pub fn domain_info(&self, name_or_alias: &str) -> Option<&DomainInfo> {
        let canonical = self.resolve_domain(name_or_alias)?;
        self.domains.get(canonical)
    }

    /// Every canonical domain name, sorted.
    pub fn domain_names(&self) -> Vec<&str> {
        self.all_domains().into_iter().map(|d| d.name.as_str()).collect()
    }

    /// Every domain, sorted by name.
    pub fn all_domains(&self) -> Vec<&DomainInfo> {
        self.index();
        let mut domains: Vec<&DomainInfo> = self.domains.values().collect();
        domains.sort_by(|a, b| a.name.cmp(&b.name));
        domains
    }

    /// Resource type by canonical name or CLI name.
    pub fn resource(&self, name: &str) -> Option<&ResourceType> {
        let index = self.index();
        if let Some(rt) = self.resources.get(name) {
            return Some(rt);
        }
        index
            .cli_names
            .get(name)
            .and_then(|canonical| self.resources.get(canonical))
    }

    /// Domains a resource is visible under; empty when the resource is unknown.
    pub fn domains(&self, resource_name: &str) -> BTreeSet<String> {
        self.resource(resource_name)
            .map(|rt| rt.domains.clone())
            .unwrap_or_default()
    }

    pub fn primary_domain(&self, resource_name: &str) -> Option<&str> {
        self.resource(resource_name)
            .map(|rt| rt.primary_domain.as_str())
    }

    /// Resources visible under a domain (name or alias), sorted by name.
    pub fn resources_in_domain(&self, domain: &str) -> Vec<&ResourceType> {
        let index = self.index();
        let Some(canonical) = index.aliases.get(domain) else {
            return Vec::new();
        };
        index
            .domain_resources
            .get(canonical)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| self.resources.get(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every resource, sorted by name.
    pub fn all_resources(&self) -> Vec<&ResourceType> {
        self.index();
        let mut resources: Vec<&ResourceType> = self.resources.values().collect();
        resources.sort_by(|a, b| a.name.cmp(&b.name));
        resources
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }

    /// Rank comparison: access iff `rank(tier) >= rank(required)`.
    pub fn validate_tier_access(&self, tier: Tier, required: Tier) -> bool {
        tier::validate_tier_access(tier, required)
    }

    /// Domains accessible at `tier`, sorted by name.
    pub fn domains_for_tier(&self, tier: Tier) -> Vec<&DomainInfo> {
        self.all_domains()
            .into_iter()
            .filter(|d| tier::validate_tier_access(tier, d.required_tier))
            .collect()
    }

    /// Preview domains, sorted by name.
    pub fn preview_domains(&self) -> Vec<&DomainInfo> {
        self.all_domains()
            .into_iter()
            .filter(|d| d.is_preview)
            .collect()
    }

    pub fn is_preview(&self, domain: &str) -> bool {
        self.domain_info(domain).map(|d| d.is_preview).unwrap_or(false)
    }

    /// Warning shown when entering a preview domain.
    pub fn preview_warning(&self, domain: &str) -> Option<String> {
        let info = self.domain_info(domain).filter(|d| d.is_preview)?;
        Some(format!(
            "PREVIEW: Domain '{}' is in beta and may have limited functionality or breaking changes.",
            info.display_name
        ))
    }

    /// Warning shown when `tier` does not meet the domain's requirement.
    pub fn tier_warning(&self, domain: &str, tier: Tier) -> Option<String> {
        let info = self.domain_info(domain)?;
        let upgrade = tier::upgrade_path(tier, info.required_tier)?;
        Some(format!(
            "Domain '{}' requires {} tier (your subscription: {}). {}",
            info.display_name, info.required_tier, tier, upgrade
        ))
    }
}
