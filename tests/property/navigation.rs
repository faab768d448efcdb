//! Property-based tests for context navigation

use proptest::prelude::*;
use std::sync::Arc;
use xcsh::catalog::builtin;
use xcsh::shell::{CommandRouter, ContextPath};

fn step() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "lb", "dns", "sec", "mesh", "list", "get", "frob", "..", "back", "exit", "root", "/",
        "/k8s", "/dns get", "context", "help", "domains", "history", "", "   ", "/nope",
    ])
}

proptest! {
    /// Any sequence of inputs leaves the router in a well-formed context
    #[test]
    fn prop_router_context_stays_well_formed(steps in prop::collection::vec(step(), 0..30)) {
        let registry = Arc::new(builtin::catalog().into_registry().unwrap());
        let mut router = CommandRouter::new(Arc::clone(&registry));
        for input in steps {
            let before = router.context().clone();
            let result = router.execute(input);
            if result.is_error() {
                prop_assert_eq!(router.context(), &before);
            }
            if result.should_exit {
                prop_assert!(router.context().is_root());
            }
            if let Some(domain) = router.context().domain() {
                prop_assert!(registry.domain_info(domain).is_some());
            }
        }
        router.execute("root");
        prop_assert!(router.context().is_root());
    }

    /// navigate_up walks action -> domain -> root
    #[test]
    fn prop_navigate_up_unwinds(domain in "[a-z]{1,8}", action in "[a-z]{1,8}") {
        let mut ctx = ContextPath::new();
        ctx.set_domain(domain.clone());
        ctx.set_action(action).unwrap();
        prop_assert!(ctx.navigate_up());
        prop_assert_eq!(ctx.clone(), ContextPath::DomainSelected(domain));
        prop_assert!(ctx.navigate_up());
        prop_assert!(ctx.is_root());
        prop_assert!(!ctx.navigate_up());
    }
}
