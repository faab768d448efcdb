//! CLI route: run context and the single route table for subcommands.

use crate::catalog::{builtin, Catalog};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_domains_json, format_domains_text, format_error_line, format_prompt,
    format_related_json, format_related_text, format_search_json, format_search_text,
};
use crate::config::{ConfigLoader, XcshConfig};
use crate::error::ApiError;
use crate::registry::Registry;
use crate::shell::{
    subscription_domain, CommandRouter, CustomDomains, DryRunExecutor, ExecutionResult,
    HistoryManager, InMemoryHistory,
};
use crate::tier::Tier;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// ANSI sequence emitted by the `clear` built-in.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J\x1b[3J";

/// Runtime context for CLI execution: merged configuration and the loaded registry.
pub struct RunContext {
    config: XcshConfig,
    registry: Arc<Registry>,
}

impl RunContext {
    /// Load configuration and the catalog.
    ///
    /// `catalog` and `tier` override the configured values when given.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        catalog: Option<PathBuf>,
        tier: Option<&str>,
    ) -> Result<Self, ApiError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Some(path) = catalog {
            config.catalog.path = Some(path);
        }
        if let Some(tier) = tier {
            config.shell.tier = tier.parse::<Tier>().map_err(ApiError::InvalidArgument)?;
        }

        config.validate().map_err(|errors| {
            ApiError::ConfigError(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        let registry = Arc::new(Self::load_registry(&config)?);
        registry.validate_custom_domains(default_custom_domains().names())?;
        info!(
            domains = registry.domain_count(),
            resources = registry.resource_count(),
            tier = %config.shell.tier,
            "Registry loaded"
        );

        Ok(Self { config, registry })
    }

    fn load_registry(config: &XcshConfig) -> Result<Registry, ApiError> {
        let catalog = match &config.catalog.path {
            Some(path) => {
                debug!(path = %path.display(), "Loading external catalog");
                Catalog::load_from_file(path)?
            }
            None => builtin::catalog(),
        };
        Ok(catalog.into_registry()?)
    }

    pub fn config(&self) -> &XcshConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Router wired with the custom domains, file-backed history and the dry-run executor.
    pub fn build_router(&self) -> Result<CommandRouter, ApiError> {
        let shell = &self.config.shell;
        let router = CommandRouter::new(Arc::clone(&self.registry))
            .with_custom_domains(default_custom_domains())
            .with_executor(DryRunExecutor::new(Arc::clone(&self.registry)))
            .with_tier(shell.tier)
            .with_history_display(shell.history_display)
            .with_namespace(shell.namespace.clone());

        let router = match shell.history_path() {
            Some(path) => {
                router.with_history(HistoryManager::open(path, shell.history_size)?)
            }
            None => router.with_history(InMemoryHistory::new(shell.history_size)),
        };
        Ok(router)
    }

    /// Execute a subcommand; `None` runs the interactive shell.
    pub fn execute(&self, command: &Option<Commands>) -> Result<String, ApiError> {
        match command {
            None | Some(Commands::Shell) => {
                let stdin = std::io::stdin();
                let mut stdout = std::io::stdout();
                self.run_shell(stdin.lock(), &mut stdout)?;
                Ok(String::new())
            }
            Some(Commands::Domains { category, format }) => {
                let domains = match category {
                    Some(category) => self.registry.domains_by_category(category),
                    None => self.registry.all_domains(),
                };
                match parse_format(format)? {
                    OutputFormat::Json => Ok(format_domains_json(&domains)),
                    OutputFormat::Text => Ok(format_domains_text(&domains)),
                }
            }
            Some(Commands::Related { domain, format }) => {
                let info = self.registry.domain_info(domain).ok_or_else(|| {
                    ApiError::InvalidArgument(format!("Unknown domain: {}", domain))
                })?;
                let related = self.registry.related_domain_scores(&info.name);
                let workflows = self.registry.workflow_suggestions(&info.name);
                match parse_format(format)? {
                    OutputFormat::Json => Ok(format_related_json(info, &related, &workflows)),
                    OutputFormat::Text => Ok(format_related_text(info, &related, &workflows)),
                }
            }
            Some(Commands::Search { query, format }) => {
                let matches = self.registry.search_use_cases(query);
                match parse_format(format)? {
                    OutputFormat::Json => Ok(format_search_json(query, &matches)),
                    OutputFormat::Text => Ok(format_search_text(query, &matches)),
                }
            }
            Some(Commands::Exec { line }) => self.execute_line(&line.join(" ")),
        }
    }

    /// Run one line through a fresh router and persist its history.
    pub fn execute_line(&self, line: &str) -> Result<String, ApiError> {
        let mut router = self.build_router()?;
        let result = router.execute(line);
        router.persist_history()?;
        match result.error {
            Some(error) => Err(ApiError::CommandFailed(error)),
            None => Ok(result.output_lines.join("\n")),
        }
    }

    /// Line-oriented REPL: prompt, read, execute, print until exit or end of input.
    pub fn run_shell<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<(), ApiError> {
        let mut router = self.build_router()?;
        let prompt = self.config.shell.prompt.as_str();
        let mut lines = input.lines();
        info!("Shell session started");

        loop {
            write!(output, "{}", format_prompt(prompt, router.context()))?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let result = router.execute(&line?);
            write_result(output, &result)?;
            if result.should_exit {
                break;
            }
        }

        router.persist_history()?;
        info!("Shell session ended");
        Ok(())
    }
}

fn write_result<W: Write>(output: &mut W, result: &ExecutionResult) -> Result<(), ApiError> {
    if result.should_clear {
        write!(output, "{}", CLEAR_SCREEN)?;
    }
    for line in &result.output_lines {
        writeln!(output, "{}", line)?;
    }
    if let Some(error) = &result.error {
        writeln!(output, "{}", format_error_line(error))?;
    }
    Ok(())
}

/// Custom domains shipped with the shell.
pub fn default_custom_domains() -> CustomDomains {
    CustomDomains::new().with(
        "subscription",
        "Show subscription tier and accessible domains",
        subscription_domain,
    )
}

enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
