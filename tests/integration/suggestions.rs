//! Completion through the router's current context

use crate::integration::router;
use xcsh::cli::default_custom_domains;
use xcsh::shell::SuggestionCategory;

fn texts(router: &xcsh::shell::CommandRouter, partial: &str) -> Vec<String> {
    router.suggest(partial).into_iter().map(|s| s.text).collect()
}

#[test]
fn test_suggestions_follow_context() {
    let mut router = router();
    assert_eq!(texts(&router, "lo"), vec!["load_balancer"]);

    router.execute("lb");
    assert_eq!(texts(&router, "g"), vec!["get"]);

    router.execute("get");
    assert_eq!(texts(&router, "r"), vec!["root"]);
    assert_eq!(texts(&router, "--o"), vec!["--output-format"]);
}

#[test]
fn test_custom_domains_come_first_at_root() {
    let router = router().with_custom_domains(default_custom_domains());
    let suggestions = router.suggest("s");
    assert_eq!(suggestions[0].text, "subscription");
    assert_eq!(suggestions[0].category, SuggestionCategory::CustomDomain);
    assert!(suggestions[1..]
        .iter()
        .all(|s| s.category != SuggestionCategory::CustomDomain));
}

#[test]
fn test_no_match_is_empty() {
    let router = router();
    assert!(router.suggest("qqq").is_empty());
}

#[test]
fn test_suggestions_are_case_insensitive_and_deterministic() {
    let router = router();
    let upper = texts(&router, "DN");
    let lower = texts(&router, "dn");
    assert_eq!(upper, vec!["dns"]);
    assert_eq!(upper, lower);
}
