//! Derived lookup tables and the one-time build guard.

use crate::catalog::{DomainInfo, ResourceType};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Lookup tables derived from the registered catalog.
///
/// Built once; never mutated afterwards.
#[derive(Debug, Default)]
pub(crate) struct DomainIndex {
    /// Canonical name and every alias -> canonical name
    pub aliases: HashMap<String, String>,
    /// Domain -> member resource names, sorted
    pub domain_resources: HashMap<String, Vec<String>>,
    /// CLI name -> canonical resource name
    pub cli_names: HashMap<String, String>,
    /// Category -> domain names, sorted
    pub categories: BTreeMap<String, Vec<String>>,
    /// Domain -> significant lowercase words from its use cases
    pub use_case_words: HashMap<String, BTreeSet<String>>,
}

impl DomainIndex {
    pub fn build(
        domains: &HashMap<String, DomainInfo>,
        resources: &HashMap<String, ResourceType>,
    ) -> Self {
        let mut index = DomainIndex::default();

        for info in domains.values() {
            for name in info.names() {
                index.aliases.insert(name.to_string(), info.name.clone());
            }
            index
                .categories
                .entry(info.category.clone())
                .or_default()
                .push(info.name.clone());
            index
                .use_case_words
                .insert(info.name.clone(), significant_words(&info.use_cases));
            index.domain_resources.entry(info.name.clone()).or_default();
        }

        for rt in resources.values() {
            for domain in &rt.domains {
                index
                    .domain_resources
                    .entry(domain.clone())
                    .or_default()
                    .push(rt.name.clone());
            }
            index.cli_names.insert(rt.cli_name.clone(), rt.name.clone());
        }

        for members in index.domain_resources.values_mut() {
            members.sort();
        }
        for members in index.categories.values_mut() {
            members.sort();
        }

        index
    }
}

/// Lowercase words of four or more alphanumeric characters.
pub(crate) fn significant_words(texts: &[String]) -> BTreeSet<String> {
    texts
        .iter()
        .flat_map(|t| t.split(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() >= 4)
        .map(|w| w.to_lowercase())
        .collect()
}

/// Guarded one-time build slot.
///
/// Readers take the shared lock for the fast path. The first caller to find the
/// slot empty upgrades to the exclusive lock and checks again before building,
/// so racing first callers never build twice and never see a partial index.
#[derive(Debug, Default)]
pub(crate) struct LazyIndex {
    slot: RwLock<Option<Arc<DomainIndex>>>,
    builds: AtomicUsize,
}

impl LazyIndex {
    pub fn get_or_build<F>(&self, build: F) -> Arc<DomainIndex>
    where
        F: FnOnce() -> DomainIndex,
    {
        if let Some(index) = self.slot.read().as_ref() {
            return Arc::clone(index);
        }

        let mut slot = self.slot.write();
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }

        let index = Arc::new(build());
        self.builds.fetch_add(1, Ordering::SeqCst);
        debug!(
            domains = index.aliases.len(),
            resources = index.cli_names.len(),
            "Registry index built"
        );
        *slot = Some(Arc::clone(&index));
        index
    }

    pub fn is_built(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Number of times the index has been constructed (0 or 1).
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}
