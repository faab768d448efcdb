//! Property-based tests for determinism guarantees

use proptest::prelude::*;
use xcsh::catalog::builtin;
use xcsh::shell::{parse_command, tokenize};

/// Registry queries return the same answer however often they are asked
#[test]
fn test_registry_query_determinism_property() {
    let registry = builtin::catalog().into_registry().unwrap();
    let names: Vec<String> = registry.domain_names().iter().map(|s| s.to_string()).collect();
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(0..names.len(), "[a-z ]{0,12}"),
            |(index, query)| {
                let domain = &names[index];
                let first: Vec<_> = registry.related_domain_scores(domain);
                let second: Vec<_> = registry.related_domain_scores(domain);
                prop_assert_eq!(&first, &second);
                prop_assert!(first.len() <= 5);
                prop_assert!(first.windows(2).all(|w| w[0].1 > w[1].1
                    || (w[0].1 == w[1].1 && w[0].0 < w[1].0)));

                let a = registry.search_use_cases(&query);
                let b = registry.search_use_cases(&query);
                prop_assert_eq!(&a, &b);
                prop_assert!(a.windows(2).all(|w| w[0].domain < w[1].domain));
                Ok(())
            },
        )
        .unwrap();
}

/// Every resource's primary domain is one of its domains
#[test]
fn test_primary_domain_membership() {
    let registry = builtin::catalog().into_registry().unwrap();
    for resource in registry.all_resources() {
        let primary = registry.primary_domain(&resource.name).unwrap();
        assert!(registry.domains(&resource.name).contains(primary));
    }
}

/// Names and aliases of distinct domains never overlap
#[test]
fn test_domain_names_disjoint() {
    let registry = builtin::catalog().into_registry().unwrap();
    let mut seen = std::collections::HashSet::new();
    for info in registry.all_domains() {
        for name in info.names() {
            assert!(seen.insert(name.to_string()), "{} claimed twice", name);
        }
    }
}

proptest! {
    /// Unquoted input tokenizes exactly like whitespace splitting
    #[test]
    fn prop_tokenize_matches_whitespace_split(input in "[a-z0-9_\\- ]{0,40}") {
        let expected: Vec<String> = input.split_whitespace().map(String::from).collect();
        prop_assert_eq!(tokenize(&input), expected);
    }

    /// Blank input parses to nothing
    #[test]
    fn prop_blank_input_is_empty(input in "[ \\t]{0,10}") {
        let parsed = parse_command(&input);
        prop_assert!(parsed.args.is_empty());
        prop_assert!(!parsed.is_builtin);
        prop_assert!(!parsed.is_navigation);
    }
}
