//! Resource catalog: static descriptors for domains, resource types and workflows.
//!
//! A catalog is pure data. It is produced externally (compiled in via
//! [`builtin::catalog`] or loaded from a TOML file via [`Catalog::load_from_file`])
//! and handed to the registry, which indexes it.

pub mod builtin;

use crate::error::{ApiError, RegistryError};
use crate::registry::Registry;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// An operation a resource type supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    List,
    Get,
    Create,
    Replace,
    Delete,
    Status,
    Patch,
    AddLabels,
    RemoveLabels,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Replace,
        Operation::Delete,
        Operation::Status,
        Operation::Patch,
        Operation::AddLabels,
        Operation::RemoveLabels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Replace => "replace",
            Operation::Delete => "delete",
            Operation::Status => "status",
            Operation::Patch => "patch",
            Operation::AddLabels => "add-labels",
            Operation::RemoveLabels => "remove-labels",
        }
    }

    /// Parse a command verb. `update` is accepted as a synonym for `replace`.
    pub fn from_verb(verb: &str) -> Option<Operation> {
        match verb {
            "update" => Some(Operation::Replace),
            _ => Operation::ALL.into_iter().find(|op| op.as_str() == verb),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed capability set of supported operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationSet(BTreeSet<Operation>);

impl OperationSet {
    /// Full CRUD plus status, patch and label operations.
    pub fn all() -> Self {
        Self(Operation::ALL.into_iter().collect())
    }

    pub fn read_only() -> Self {
        Self::from_ops(&[Operation::List, Operation::Get, Operation::Status])
    }

    pub fn from_ops(ops: &[Operation]) -> Self {
        Self(ops.iter().copied().collect())
    }

    pub fn contains(&self, op: Operation) -> bool {
        self.0.contains(&op)
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A manageable entity exposed by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    /// Canonical name (e.g. `http_loadbalancer`)
    pub name: String,

    /// CLI-facing name (e.g. `http-loadbalancer`); derived from `name` when empty
    #[serde(default)]
    pub cli_name: String,

    #[serde(default)]
    pub description: String,

    /// Base API path, `{namespace}` is substituted for namespace-scoped resources
    #[serde(default)]
    pub api_path: String,

    #[serde(default = "default_true")]
    pub supports_namespace: bool,

    #[serde(default = "OperationSet::all")]
    pub operations: OperationSet,

    pub primary_domain: String,

    /// Every domain this resource is visible under; always contains `primary_domain`
    #[serde(default)]
    pub domains: BTreeSet<String>,

    #[serde(default)]
    pub required_tier: Option<Tier>,
}

fn default_true() -> bool {
    true
}

impl ResourceType {
    /// Create a resource visible only under its primary domain, with all operations.
    pub fn new(name: impl Into<String>, primary_domain: impl Into<String>) -> Self {
        let name = name.into();
        let primary_domain = primary_domain.into();
        let mut domains = BTreeSet::new();
        domains.insert(primary_domain.clone());
        Self {
            cli_name: name.replace('_', "-"),
            api_path: format!("/api/config/namespaces/{{namespace}}/{}s", name),
            name,
            description: String::new(),
            supports_namespace: true,
            operations: OperationSet::all(),
            primary_domain,
            domains,
            required_tier: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Make the resource additionally visible under `domain`.
    pub fn also_in(mut self, domain: impl Into<String>) -> Self {
        self.domains.insert(domain.into());
        self
    }

    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    pub fn with_api_path(mut self, api_path: impl Into<String>, supports_namespace: bool) -> Self {
        self.api_path = api_path.into();
        self.supports_namespace = supports_namespace;
        self
    }

    pub fn with_required_tier(mut self, tier: Tier) -> Self {
        self.required_tier = Some(tier);
        self
    }

    /// Build the concrete API path for a namespace and optional object name.
    pub fn api_path_for(&self, namespace: Option<&str>, name: Option<&str>) -> String {
        let mut path = self.api_path.clone();
        if self.supports_namespace {
            if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
                path = path.replacen("{namespace}", ns, 1);
            }
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            path = format!("{}/{}", path, name);
        }
        path
    }

    /// Fill derived fields after deserialization.
    fn normalize(&mut self) {
        if self.cli_name.is_empty() {
            self.cli_name = self.name.replace('_', "-");
        }
        if self.domains.is_empty() {
            self.domains.insert(self.primary_domain.clone());
        }
    }
}

/// Domain metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    /// Canonical name (e.g. `load_balancer`)
    pub name: String,

    /// Human name (e.g. `Load Balancer`); derived from `name` when empty
    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default = "default_required_tier")]
    pub required_tier: Tier,

    #[serde(default)]
    pub is_preview: bool,

    #[serde(default)]
    pub use_cases: Vec<String>,

    #[serde(default)]
    pub related_domains: Vec<String>,
}

fn default_required_tier() -> Tier {
    Tier::Standard
}

impl DomainInfo {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: title_case(&name),
            name,
            description: String::new(),
            aliases: Vec::new(),
            category: category.into(),
            required_tier: Tier::Standard,
            is_preview: false,
            use_cases: Vec::new(),
            related_domains: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.required_tier = tier;
        self
    }

    pub fn preview(mut self) -> Self {
        self.is_preview = true;
        self
    }

    pub fn with_use_cases(mut self, use_cases: &[&str]) -> Self {
        self.use_cases = use_cases.iter().map(|u| u.to_string()).collect();
        self
    }

    pub fn with_related(mut self, related: &[&str]) -> Self {
        self.related_domains = related.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    fn normalize(&mut self) {
        if self.display_name.is_empty() {
            self.display_name = title_case(&self.name);
        }
    }
}

/// A named multi-domain workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub domains: Vec<String>,
}

impl Workflow {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        domains: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Complete catalog as produced by the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub domains: Vec<DomainInfo>,
    #[serde(default)]
    pub resources: Vec<ResourceType>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ApiError> {
        let mut catalog: Catalog = toml::from_str(content)?;
        catalog.domains.iter_mut().for_each(DomainInfo::normalize);
        catalog.resources.iter_mut().for_each(ResourceType::normalize);
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ApiError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::CatalogError(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Register everything into a fresh registry: domains first, then resources.
    pub fn into_registry(self) -> Result<Registry, RegistryError> {
        let mut registry = Registry::new();
        for domain in self.domains {
            registry.register_domain(domain)?;
        }
        for resource in self.resources {
            registry.register(resource)?;
        }
        for workflow in self.workflows {
            registry.register_workflow(workflow);
        }
        Ok(registry)
    }
}

/// `load_balancer` -> `Load Balancer`
pub fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
