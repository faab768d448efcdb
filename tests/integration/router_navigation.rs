//! End-to-end routing through the public `CommandRouter` API

use crate::integration::router;
use xcsh::cli::default_custom_domains;
use xcsh::shell::{version_line, ContextPath, InMemoryHistory};
use xcsh::tier::Tier;

#[test]
fn test_full_navigation_round_trip() {
    let mut router = router();

    let result = router.execute("sec");
    assert!(result.context_changed);
    assert_eq!(router.context(), &ContextPath::DomainSelected("security".into()));

    let result = router.execute("list");
    assert!(result.context_changed);
    assert_eq!(
        router.context(),
        &ContextPath::ActionSelected("security".into(), "list".into())
    );

    router.execute("..");
    assert_eq!(router.context(), &ContextPath::DomainSelected("security".into()));
    router.execute("back");
    assert!(router.context().is_root());

    let result = router.execute("exit");
    assert!(result.should_exit);
    assert_eq!(result.output_lines, vec!["Goodbye!"]);
    assert!(router.context().is_root());
}

#[test]
fn test_exit_inside_domain_only_navigates_up() {
    let mut router = router();
    router.execute("dns");
    let result = router.execute("exit");
    assert!(!result.should_exit);
    assert!(result.context_changed);
    assert!(router.context().is_root());
}

#[test]
fn test_quit_exits_from_anywhere() {
    let mut router = router();
    router.execute("lb list");
    let result = router.execute("quit");
    assert!(result.should_exit);
    assert_eq!(
        router.context(),
        &ContextPath::ActionSelected("load_balancer".into(), "list".into())
    );
}

#[test]
fn test_root_and_slash_reset() {
    let mut router = router();
    router.execute("k8s get");
    assert!(router.execute("root").context_changed);
    assert!(router.context().is_root());

    router.execute("obs");
    assert!(router.execute("/").context_changed);
    assert!(router.context().is_root());

    // Already at root: nothing changes
    assert!(!router.execute("root").context_changed);
}

#[test]
fn test_context_report_and_clear() {
    let mut router = router().with_tier(Tier::Professional);
    router.execute("dns");
    router.execute("get");
    let report = router.execute("ctx");
    assert_eq!(
        report.output_lines,
        vec![
            "Current Context:",
            "  Domain:  dns",
            "  Action:  get",
            "  Path:    dns/get",
            "  Tier:    Professional",
        ]
    );

    let result = router.execute("clear");
    assert!(result.should_clear);
    assert!(!result.should_exit);
}

#[test]
fn test_history_lists_recent_forwarded_commands() {
    let mut router = router()
        .with_history(InMemoryHistory::new(10))
        .with_history_display(2);
    assert_eq!(router.execute("history").output_lines, vec!["No history"]);

    router.execute("dns list dns_zone");
    router.execute("dns_lb_pool");
    router.execute("dns_lb_pool");
    router.execute("dns_load_balancer -n prod");

    assert_eq!(
        router.history_entries(),
        vec!["dns list dns_zone", "dns_lb_pool", "dns_load_balancer -n prod"]
    );
    assert_eq!(
        router.execute("history").output_lines,
        vec!["   2  dns_lb_pool", "   3  dns_load_balancer -n prod"]
    );
}

#[test]
fn test_domains_lists_generated_and_custom_sorted() {
    let mut router = router().with_custom_domains(default_custom_domains());
    let lines = router.execute("domains").output_lines;

    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
    assert!(lines.contains(&"subscription".to_string()));
    assert!(lines.contains(&"load_balancer".to_string()));
    assert!(lines.contains(&"service_mesh [PREVIEW]".to_string()));
    assert!(!lines.iter().any(|l| l == "lb"));
}

#[test]
fn test_version_builtin() {
    let mut router = router();
    assert_eq!(router.execute("version").output_lines, vec![version_line()]);
}

#[test]
fn test_subscription_custom_domain_sees_session_tier() {
    let mut router = router()
        .with_custom_domains(default_custom_domains())
        .with_tier(Tier::Free);
    let result = router.execute("subscription");
    assert_eq!(result.output_lines[0], "Tier: Free");
    assert_eq!(result.output_lines.last().unwrap(), "Next tier: Standard");
    assert!(router.context().is_root());

    let result = router.execute("/subscription domains");
    assert_eq!(result.output_lines, vec!["billing"]);

    assert!(router.execute("subscription cancel").is_error());
}

#[test]
fn test_forward_from_domain_context_with_flags() {
    let mut router = router();
    router.execute("lb");
    // Flags at a domain are forwarded rather than entering an action
    let result = router.execute("--help");
    assert!(result.error.is_none());
    assert_eq!(result.output_lines, vec!["would run: xcsh load_balancer --help"]);
    assert_eq!(router.context(), &ContextPath::DomainSelected("load_balancer".into()));
    assert_eq!(router.history_entries(), vec!["--help"]);

    // A rejected command is neither applied nor recorded
    assert!(router.execute("get no_such_type").is_error());
    assert_eq!(router.context(), &ContextPath::DomainSelected("load_balancer".into()));
    assert_eq!(router.history_entries(), vec!["--help"]);
}

#[test]
fn test_direct_navigation_forwards_with_namespace() {
    let mut router = router();
    router.execute("sites");
    let result = router.execute("/lb get http_loadbalancer web --namespace prod");
    assert!(result.error.is_none());
    assert_eq!(
        result.output_lines,
        vec![
            "would run: xcsh load_balancer get http_loadbalancer web --namespace prod",
            "  get /api/config/namespaces/prod/http_loadbalancers/web",
        ]
    );
    assert_eq!(
        router.context(),
        &ContextPath::ActionSelected("load_balancer".into(), "get".into())
    );
}
