//! External TOML catalogs

use tempfile::TempDir;
use xcsh::catalog::Catalog;
use xcsh::cli::{Commands, RunContext};
use xcsh::error::{ApiError, RegistryError};

const EDGE_CATALOG: &str = r#"
[[domains]]
name = "edge"
aliases = ["e"]
category = "Networking"
description = "Edge delivery"
use_cases = ["Serve static content at the edge"]
related_domains = ["origin"]

[[domains]]
name = "origin"
category = "Networking"
required_tier = "Professional"

[[resources]]
name = "edge_site"
primary_domain = "edge"
domains = ["edge", "origin"]
api_path = "/api/edge/namespaces/{namespace}/sites"
operations = ["list", "get"]

[[workflows]]
name = "Edge Delivery"
category = "Networking"
domains = ["edge", "origin"]
"#;

fn write_catalog(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn empty_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("xcsh.toml");
    let history = dir.path().join("history");
    std::fs::write(
        &path,
        format!("[shell]\nhistory_file = {:?}\n", history.to_string_lossy().to_string()),
    )
    .unwrap();
    path
}

#[test]
fn test_external_catalog_drives_router() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, EDGE_CATALOG);
    let ctx = RunContext::new(
        dir.path().to_path_buf(),
        Some(empty_config(&dir)),
        Some(catalog),
        None,
    )
    .unwrap();

    assert_eq!(ctx.registry().domain_count(), 2);
    assert_eq!(ctx.registry().resolve_domain("e"), Some("edge"));

    let output = ctx.execute_line("e get edge_site paris -n cdn").unwrap();
    assert_eq!(
        output,
        "would run: xcsh edge get edge_site paris -n cdn\n  get /api/edge/namespaces/cdn/sites/paris"
    );

    let err = ctx.execute_line("edge delete edge_site paris").unwrap_err();
    assert!(err.to_string().contains("does not support 'delete'"));

    let related = ctx
        .execute(&Some(Commands::Related {
            domain: "e".into(),
            format: "json".into(),
        }))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&related).unwrap();
    assert_eq!(value["related"][0]["domain"], "origin");
    assert_eq!(value["workflows"][0]["name"], "Edge Delivery");
}

#[test]
fn test_catalog_with_colliding_alias_is_rejected() {
    let bad = r#"
[[domains]]
name = "edge"
aliases = ["shared"]

[[domains]]
name = "other"
aliases = ["shared"]
"#;
    let err = Catalog::from_toml_str(bad).unwrap().into_registry().unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateDomainName { .. }));
}

#[test]
fn test_catalog_claiming_custom_domain_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(
        &dir,
        "[[domains]]\nname = \"billing\"\naliases = [\"subscription\"]\n",
    );
    let result = RunContext::new(
        dir.path().to_path_buf(),
        Some(empty_config(&dir)),
        Some(catalog),
        None,
    );
    assert!(matches!(
        result,
        Err(ApiError::RegistryError(RegistryError::DuplicateDomainName { .. }))
    ));
}

#[test]
fn test_malformed_catalog_file() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "[[resources]]\nprimary_domain = 5\n");
    let result = RunContext::new(
        dir.path().to_path_buf(),
        Some(empty_config(&dir)),
        Some(catalog),
        None,
    );
    assert!(matches!(result, Err(ApiError::CatalogError(_))));
}
