//! Category queries over the domain table.

use super::Registry;
use crate::catalog::DomainInfo;
use serde::Serialize;

/// Domains grouped under one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGrouping<'a> {
    pub category: String,
    pub domains: Vec<&'a DomainInfo>,
}

/// Number of domains in a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl Registry {
    /// Every non-empty category, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.index()
            .categories
            .keys()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect()
    }

    /// Domains in `category`, sorted by name. Unknown category yields an empty list.
    pub fn domains_by_category(&self, category: &str) -> Vec<&DomainInfo> {
        self.index()
            .categories
            .get(category)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| self.domains.get(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All domains grouped by category; categories and members both sorted.
    pub fn group_by_category(&self) -> Vec<CategoryGrouping<'_>> {
        self.categories()
            .into_iter()
            .map(|category| {
                let domains = self.domains_by_category(&category);
                CategoryGrouping { category, domains }
            })
            .collect()
    }

    /// Domain count per category, count descending then name ascending.
    pub fn category_distribution(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = self
            .index()
            .categories
            .iter()
            .filter(|(c, _)| !c.is_empty())
            .map(|(category, names)| CategoryCount {
                category: category.clone(),
                count: names.len(),
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
        counts
    }
}
