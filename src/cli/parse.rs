//! CLI parse: clap types for xcsh. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xcsh - Interactive shell for domain-organized cloud APIs
#[derive(Parser, Debug)]
#[command(name = "xcsh")]
#[command(version)]
#[command(about = "Interactive, domain-organized shell for cloud-management APIs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace directory searched for `.xcsh/` configuration
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resource catalog file (TOML); the built-in catalog is used otherwise
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Subscription tier (free, standard, professional, enterprise)
    #[arg(long)]
    pub tier: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// List domains
    Domains {
        /// Only domains in this category
        #[arg(long)]
        category: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show domains and workflows related to a domain
    Related {
        /// Domain name or alias
        domain: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Search domain use cases
    Search {
        /// Case-insensitive text to look for
        query: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run a single line through the shell router and exit
    Exec {
        /// The shell input, e.g. `lb list http_loadbalancer -n prod`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        line: Vec<String>,
    },
}
