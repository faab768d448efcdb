//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Defaults mirror the `Default` impls so a partially specified file still
/// deserializes.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("shell.history_size", 1000_i64)?
        .set_default("shell.history_display", 20_i64)?
        .set_default("shell.tier", "standard")?
        .set_default("shell.prompt", "xcsh")?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
