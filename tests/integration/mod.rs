//! Integration tests for the xcsh shell

mod catalog_file;
mod config_integration;
mod history_file;
mod registry_concurrency;
mod router_navigation;
mod suggestions;
mod test_utils;

pub use test_utils::{builtin_registry, router, with_xdg_env};
