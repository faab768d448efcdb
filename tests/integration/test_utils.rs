//! Shared test utilities for integration tests
//!
//! Isolated XDG directories plus ready-made registries and routers.

use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use xcsh::catalog::builtin;
use xcsh::registry::Registry;
use xcsh::shell::CommandRouter;

/// Serializes XDG and XCSH_* environment access across all integration tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

const TRACKED_VARS: [&str; 5] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XCSH_ENV",
    "XCSH_SHELL__TIER",
];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: TRACKED_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (key, value) in self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Run `f` with HOME, XDG_CONFIG_HOME and XDG_DATA_HOME pointing into `test_dir`.
///
/// `XCSH_ENV` and `XCSH_SHELL__TIER` are cleared for the duration; everything
/// is restored afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_data_home = test_dir.path().join("data");
    let test_home = test_dir.path().join("home");

    std::fs::create_dir_all(&test_config_home).unwrap();
    std::fs::create_dir_all(&test_data_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());
    std::env::set_var("XDG_DATA_HOME", test_data_home.to_str().unwrap());
    std::env::remove_var("XCSH_ENV");
    std::env::remove_var("XCSH_SHELL__TIER");

    let result = f();

    env_state.restore();

    result
}

pub fn builtin_registry() -> Arc<Registry> {
    Arc::new(builtin::catalog().into_registry().unwrap())
}

/// Router over the built-in catalog with in-memory history and no custom domains.
pub fn router() -> CommandRouter {
    CommandRouter::new(builtin_registry())
}
