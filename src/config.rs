//! Configuration System
//!
//! Layered configuration for the shell: merge-policy defaults, the global
//! file, workspace files and `XCSH_*` environment overrides, deserialized into
//! [`XcshConfig`] and validated before use.

use crate::logging::LoggingConfig;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{config_dir, data_dir, default_history_file};
pub use sources::workspace_file::WORKSPACE_CONFIG_DIR;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XcshConfig {
    /// Interactive shell settings
    #[serde(default)]
    pub shell: ShellConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resource catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Interactive shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Maximum entries kept in the history file
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Entries shown by the `history` built-in
    #[serde(default = "default_history_display")]
    pub history_display: usize,

    /// History file; `None` uses `$XDG_DATA_HOME/xcsh/history`
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// Subscription tier used for domain access warnings
    #[serde(default)]
    pub tier: Tier,

    /// Prompt prefix
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Namespace added to forwarded commands that don't pass `-n`
    #[serde(default)]
    pub namespace: Option<String>,
}

fn default_history_size() -> usize {
    1000
}

fn default_history_display() -> usize {
    20
}

fn default_prompt() -> String {
    "xcsh".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            history_display: default_history_display(),
            history_file: None,
            tier: Tier::default(),
            prompt: default_prompt(),
            namespace: None,
        }
    }
}

impl ShellConfig {
    /// Configured history file or the default location.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(default_history_file)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.history_size == 0 {
            return Err("history_size must be greater than zero".to_string());
        }
        if self.history_display == 0 {
            return Err("history_display must be greater than zero".to_string());
        }
        if self.prompt.trim().is_empty() {
            return Err("prompt cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Resource catalog source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External TOML catalog; the compiled-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Shell(String),
    Logging(String),
    Catalog(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Shell(msg) => write!(f, "Shell: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Catalog(msg) => write!(f, "Catalog: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl XcshConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.shell.validate() {
            errors.push(ValidationError::Shell(e));
        }

        if let Err(e) = crate::logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = crate::logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                errors.push(ValidationError::Catalog(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
