//! Configuration layering feeding the run context

use crate::integration::with_xdg_env;
use tempfile::TempDir;
use xcsh::cli::RunContext;
use xcsh::config::{ConfigLoader, WORKSPACE_CONFIG_DIR};
use xcsh::tier::Tier;

#[test]
fn test_global_config_sets_tier_and_default_history_location() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        let global = test_dir.path().join("config").join("xcsh");
        std::fs::create_dir_all(&global).unwrap();
        std::fs::write(global.join("config.toml"), "[shell]\ntier = \"enterprise\"\n").unwrap();

        let ctx = RunContext::new(workspace.path().to_path_buf(), None, None, None).unwrap();
        assert_eq!(ctx.config().shell.tier, Tier::Enterprise);

        let output = ctx.execute_line("subscription").unwrap();
        assert!(output.starts_with("Tier: Enterprise"));

        ctx.execute_line("dns list dns_zone").unwrap();
        let history = test_dir.path().join("data").join("xcsh").join("history");
        assert_eq!(std::fs::read_to_string(history).unwrap(), "dns list dns_zone\n");
    });
}

#[test]
fn test_workspace_config_and_cli_override() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        let ws_dir = workspace.path().join(WORKSPACE_CONFIG_DIR);
        std::fs::create_dir_all(&ws_dir).unwrap();
        std::fs::write(
            ws_dir.join("config.toml"),
            "[shell]\ntier = \"free\"\nprompt = \"edge\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.shell.tier, Tier::Free);
        assert_eq!(config.shell.prompt, "edge");

        let ctx = RunContext::new(
            workspace.path().to_path_buf(),
            None,
            None,
            Some("professional"),
        )
        .unwrap();
        assert_eq!(ctx.config().shell.tier, Tier::Professional);
        assert_eq!(ctx.config().shell.prompt, "edge");
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        let ws_dir = workspace.path().join(WORKSPACE_CONFIG_DIR);
        std::fs::create_dir_all(&ws_dir).unwrap();
        std::fs::write(ws_dir.join("config.toml"), "[shell]\ntier = \"free\"\n").unwrap();

        std::env::set_var("XCSH_SHELL__TIER", "enterprise");
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.shell.tier, Tier::Enterprise);
    });
}

#[test]
fn test_invalid_config_is_rejected() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        let ws_dir = workspace.path().join(WORKSPACE_CONFIG_DIR);
        std::fs::create_dir_all(&ws_dir).unwrap();
        std::fs::write(ws_dir.join("config.toml"), "[shell]\nhistory_size = 0\n").unwrap();

        let err = RunContext::new(workspace.path().to_path_buf(), None, None, None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("history_size"));
    });
}
