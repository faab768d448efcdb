//! File-backed history across router sessions

use crate::integration::builtin_registry;
use tempfile::TempDir;
use xcsh::shell::{CommandRouter, History, HistoryManager};

#[test]
fn test_history_survives_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("history");

    let mut router = CommandRouter::new(builtin_registry())
        .with_history(HistoryManager::open(&path, 100).unwrap());
    router.execute("lb list http_loadbalancer");
    router.execute("origin_pool");
    router.execute("..");
    router.persist_history().unwrap();

    let reopened = HistoryManager::open(&path, 100).unwrap();
    assert_eq!(
        reopened.entries(),
        vec!["lb list http_loadbalancer", "origin_pool"]
    );

    let mut router = CommandRouter::new(builtin_registry()).with_history(reopened);
    let lines = router.execute("history").output_lines;
    assert_eq!(lines, vec!["   1  lb list http_loadbalancer", "   2  origin_pool"]);
}

#[test]
fn test_history_bounded_on_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    std::fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

    let history = HistoryManager::open(&path, 2).unwrap();
    assert_eq!(history.entries(), vec!["three", "four"]);
}

#[test]
fn test_missing_history_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let history = HistoryManager::open(dir.path().join("absent"), 10).unwrap();
    assert!(history.entries().is_empty());
    assert!(!dir.path().join("absent").exists());
}
