//! Use-case search and coverage statistics.

use super::Registry;
use serde::Serialize;

/// First use case of a domain matching a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseMatch {
    pub domain: String,
    pub use_case: String,
    /// Position of the matching use case within the domain's list
    pub position: usize,
}

/// Use-case coverage across the domain table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseStatistics {
    pub total_domains: usize,
    pub domains_with_use_cases: usize,
    pub domains_without_use_cases: usize,
    pub coverage_percentage: f64,
    pub total_use_cases: usize,
    pub average_per_domain: f64,
}

impl Registry {
    /// Case-insensitive substring search over every domain's use cases.
    ///
    /// At most one match per domain (the first matching use case), ordered by
    /// domain name. An empty query matches every domain that has use cases.
    pub fn search_use_cases(&self, query: &str) -> Vec<UseCaseMatch> {
        let needle = query.trim().to_lowercase();
        self.all_domains()
            .into_iter()
            .filter_map(|domain| {
                domain
                    .use_cases
                    .iter()
                    .enumerate()
                    .find(|(_, uc)| uc.to_lowercase().contains(&needle))
                    .map(|(position, uc)| UseCaseMatch {
                        domain: domain.name.clone(),
                        use_case: uc.clone(),
                        position,
                    })
            })
            .collect()
    }

    pub fn use_case_statistics(&self) -> UseCaseStatistics {
        let total_domains = self.domain_count();
        let with: Vec<usize> = self
            .all_domains()
            .iter()
            .map(|d| d.use_cases.len())
            .filter(|n| *n > 0)
            .collect();
        let domains_with_use_cases = with.len();
        let total_use_cases: usize = with.iter().sum();

        let coverage_percentage = if total_domains > 0 {
            domains_with_use_cases as f64 / total_domains as f64 * 100.0
        } else {
            0.0
        };
        let average_per_domain = if domains_with_use_cases > 0 {
            total_use_cases as f64 / domains_with_use_cases as f64
        } else {
            0.0
        };

        UseCaseStatistics {
            total_domains,
            domains_with_use_cases,
            domains_without_use_cases: total_domains - domains_with_use_cases,
            coverage_percentage,
            total_use_cases,
            average_per_domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{builtin, DomainInfo};
    use crate::registry::Registry;

    #[test]
    fn test_search_use_cases_case_insensitive() {
        let registry = builtin::catalog().into_registry().unwrap();
        let matches = registry.search_use_cases("LOAD BALANCING");
        let domains: Vec<&str> = matches.iter().map(|m| m.domain.as_str()).collect();
        assert_eq!(domains, vec!["cdn", "dns", "load_balancer"]);
        let dns = &matches[1];
        assert_eq!(dns.position, 1);
        assert_eq!(dns.use_case, "Configure DNS load balancing across regions");
    }

    #[test]
    fn test_search_use_cases_dedup_first_match() {
        let registry = builtin::catalog().into_registry().unwrap();
        let matches = registry.search_use_cases("sites");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].domain, "network");
        assert_eq!(matches[1].domain, "sites");
        assert_eq!(matches[1].position, 0);
    }

    #[test]
    fn test_search_use_cases_deterministic() {
        let registry = builtin::catalog().into_registry().unwrap();
        assert_eq!(
            registry.search_use_cases("manage"),
            registry.search_use_cases("manage")
        );
        assert!(registry.search_use_cases("zzz-no-match").is_empty());
    }

    #[test]
    fn test_empty_query_matches_all_with_use_cases() {
        let mut registry = Registry::new();
        registry
            .register_domain(DomainInfo::new("a", "X").with_use_cases(&["first", "second"]))
            .unwrap();
        registry.register_domain(DomainInfo::new("b", "X")).unwrap();
        let matches = registry.search_use_cases("");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].use_case, "first");
    }

    #[test]
    fn test_use_case_statistics() {
        let mut registry = Registry::new();
        registry
            .register_domain(DomainInfo::new("a", "X").with_use_cases(&["one", "two"]))
            .unwrap();
        registry
            .register_domain(DomainInfo::new("b", "X").with_use_cases(&["three"]))
            .unwrap();
        registry.register_domain(DomainInfo::new("c", "X")).unwrap();
        registry.register_domain(DomainInfo::new("d", "X")).unwrap();

        let stats = registry.use_case_statistics();
        assert_eq!(stats.total_domains, 4);
        assert_eq!(stats.domains_with_use_cases, 2);
        assert_eq!(stats.domains_without_use_cases, 2);
        assert_eq!(stats.total_use_cases, 3);
        assert!((stats.coverage_percentage - 50.0).abs() < f64::EPSILON);
        assert!((stats.average_per_domain - 1.5).abs() < f64::EPSILON);
    }
}
