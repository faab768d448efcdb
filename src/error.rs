//! Error types for the xcsh shell.

use thiserror::Error;

/// Catalog load-time contract violations.
///
/// These only occur while a registry is being populated; once the index is
/// built every query is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate resource type: {0}")]
    DuplicateResource(String),

    #[error("Domain name or alias '{name}' is already used by domain '{existing}'")]
    DuplicateDomainName { name: String, existing: String },

    #[error("Resource '{resource}' has primary domain '{primary}' outside its domain set")]
    PrimaryDomainNotMember { resource: String, primary: String },

    #[error("Resource '{resource}' references unknown domain '{domain}'")]
    UnknownDomainReference { resource: String, domain: String },

    #[error("Registry index already built; cannot register '{0}'")]
    Sealed(String),
}

/// Command classification errors.
///
/// Raised inside the router and folded into an `ExecutionResult`; they never
/// cross the `execute` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownBuiltin(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Invalid navigation: {0}")]
    InvalidNavigation(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Top-level errors for configuration, logging, catalog loading and CLI commands.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Registry error: {0}")]
    RegistryError(#[from] RegistryError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    CommandFailed(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::CatalogError(err.to_string())
    }
}
