//! Lazy index construction under concurrent first access

use std::sync::{Arc, Barrier};
use std::thread;
use xcsh::catalog::builtin;

#[test]
fn test_concurrent_first_lookup_builds_index_once() {
    let registry = Arc::new(builtin::catalog().into_registry().unwrap());
    assert_eq!(registry.index_build_count(), 0);

    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = if i % 2 == 0 { "lb" } else { "load_balancer" };
                registry.domain_info(name).map(|info| info.name.clone())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("load_balancer"));
    }
    assert_eq!(registry.index_build_count(), 1);
}

#[test]
fn test_concurrent_queries_agree() {
    let registry = Arc::new(builtin::catalog().into_registry().unwrap());
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let related: Vec<String> = registry
                    .related_domains("security")
                    .into_iter()
                    .map(|d| d.name.clone())
                    .collect();
                let search: Vec<String> = registry
                    .search_use_cases("load balancing")
                    .into_iter()
                    .map(|m| m.domain)
                    .collect();
                (related, search)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].1, vec!["cdn", "dns", "load_balancer"]);
    assert_eq!(registry.index_build_count(), 1);
}
