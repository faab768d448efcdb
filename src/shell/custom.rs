//! Custom domains: names whose behavior is supplied outside the registry.

use super::context::ContextPath;
use super::result::ExecutionResult;
use crate::registry::Registry;
use crate::tier::Tier;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Read-only view of the session handed to custom domain handlers.
#[derive(Clone, Copy)]
pub struct Session<'a> {
    pub context: &'a ContextPath,
    pub registry: &'a Registry,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomDomainSummary {
    pub name: String,
    pub description: String,
}

/// Externally implemented domain handlers.
pub trait CustomDomainSet {
    fn execute(&self, name: &str, args: &[String], session: &Session<'_>) -> ExecutionResult;

    fn all(&self) -> Vec<CustomDomainSummary>;

    fn contains(&self, name: &str) -> bool {
        self.all().iter().any(|d| d.name == name)
    }
}

/// Outcome of looking a name up against custom and generated domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Custom domain; takes priority over a generated domain of the same name
    Custom(String),
    /// Generated domain, canonical name
    Domain(String),
    Unknown,
}

/// Empty custom domain set.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCustomDomains;

impl CustomDomainSet for NoCustomDomains {
    fn execute(&self, name: &str, _args: &[String], _session: &Session<'_>) -> ExecutionResult {
        ExecutionResult::failed(crate::error::ShellError::UnknownDomain(name.to_string()))
    }

    fn all(&self) -> Vec<CustomDomainSummary> {
        Vec::new()
    }
}

type Handler = Box<dyn Fn(&[String], &Session<'_>) -> ExecutionResult + Send + Sync>;

struct Entry {
    description: String,
    handler: Handler,
}

/// Custom domains backed by closures, keyed by name.
#[derive(Default)]
pub struct CustomDomains {
    entries: BTreeMap<String, Entry>,
}

impl CustomDomains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler; a later registration under the same name replaces the earlier one.
    pub fn with<F>(mut self, name: &str, description: &str, handler: F) -> Self
    where
        F: Fn(&[String], &Session<'_>) -> ExecutionResult + Send + Sync + 'static,
    {
        self.entries.insert(
            name.to_string(),
            Entry {
                description: description.to_string(),
                handler: Box::new(handler),
            },
        );
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for CustomDomains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDomains")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CustomDomainSet for CustomDomains {
    fn execute(&self, name: &str, args: &[String], session: &Session<'_>) -> ExecutionResult {
        match self.entries.get(name) {
            Some(entry) => (entry.handler)(args, session),
            None => NoCustomDomains.execute(name, args, session),
        }
    }

    fn all(&self) -> Vec<CustomDomainSummary> {
        self.entries
            .iter()
            .map(|(name, entry)| CustomDomainSummary {
                name: name.clone(),
                description: entry.description.clone(),
            })
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// `subscription` custom domain: reports the session tier and what it unlocks.
pub fn subscription_domain(args: &[String], session: &Session<'_>) -> ExecutionResult {
    let registry = session.registry;
    match args.first().map(String::as_str) {
        None | Some("show") => {
            let accessible = registry.domains_for_tier(session.tier).len();
            let mut result = ExecutionResult::lines([
                format!("Tier: {}", session.tier),
                format!(
                    "Accessible domains: {} of {}",
                    accessible,
                    registry.domain_count()
                ),
            ]);
            if let Some(next) = session.tier.next() {
                result = result.with_line(format!("Next tier: {}", next));
            }
            result
        }
        Some("domains") => ExecutionResult::lines(
            registry
                .domains_for_tier(session.tier)
                .into_iter()
                .map(|d| d.name.clone()),
        ),
        Some(other) => ExecutionResult::failed(crate::error::ShellError::InvalidCommand(
            format!("subscription {}", other),
        )),
    }
}
