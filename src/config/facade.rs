//! Config loader facade: the single entry point for building an `XcshConfig`.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::XcshConfig;
use crate::error::ApiError;
use config::{Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration from layered sources.
///
/// Precedence, lowest first: merge-policy defaults, global file, workspace
/// files, `XCSH_*` environment variables (`__` separates nested keys, e.g.
/// `XCSH_SHELL__TIER=enterprise`).
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    pub fn load(workspace_root: &Path) -> Result<XcshConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: XcshConfig = builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file; environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<XcshConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config: XcshConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        debug!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    /// Defaults only, no files or environment.
    pub fn defaults() -> Result<XcshConfig, ApiError> {
        Ok(merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()?)
    }

    /// Path of the global config file, whether or not it exists.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn environment() -> Environment {
        Environment::with_prefix("XCSH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
