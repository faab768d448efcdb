//! Built-in shell commands.

use super::parse::ACTION_VERBS;
use super::result::ExecutionResult;
use super::route::CommandRouter;
use super::custom::Resolution;
use crate::error::ShellError;
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_HISTORY_DISPLAY: usize = 20;

/// Every built-in keyword with a one-line description, in display order.
pub const BUILTIN_KEYWORDS: [(&str, &str); 13] = [
    ("help", "Show help information"),
    ("clear", "Clear the screen"),
    ("quit", "Exit the shell"),
    ("exit", "Go up one level (exit the shell at root)"),
    ("back", "Go up one level"),
    ("..", "Go up one level"),
    ("root", "Return to root context"),
    ("/", "Return to root context"),
    ("context", "Show current context"),
    ("ctx", "Show current context (alias)"),
    ("history", "Show command history"),
    ("version", "Show version information"),
    ("domains", "List available domains"),
];

const ACTION_HELP: [(&str, &str); 7] = [
    ("list", "List resources"),
    ("get <name>", "Get a specific resource"),
    ("create", "Create a new resource"),
    ("delete <name>", "Delete a resource"),
    ("replace", "Replace a resource"),
    ("apply", "Apply configuration from file"),
    ("status <name>", "Get resource status"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Clear,
    Quit,
    /// `exit`
    Exit,
    /// `back` or `..`
    Back,
    /// `root` or `/`
    Root,
    /// `context` or `ctx`
    Context,
    History,
    Version,
    Domains,
}

impl Builtin {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let builtin = match keyword {
            "help" => Builtin::Help,
            "clear" => Builtin::Clear,
            "quit" => Builtin::Quit,
            "exit" => Builtin::Exit,
            "back" | ".." => Builtin::Back,
            "root" | "/" => Builtin::Root,
            "context" | "ctx" => Builtin::Context,
            "history" => Builtin::History,
            "version" => Builtin::Version,
            "domains" => Builtin::Domains,
            _ => return None,
        };
        Some(builtin)
    }

    pub fn description(keyword: &str) -> Option<&'static str> {
        BUILTIN_KEYWORDS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, d)| *d)
    }
}

pub fn version_line() -> String {
    format!("xcsh {}", env!("CARGO_PKG_VERSION"))
}

impl CommandRouter {
    pub(super) fn run_builtin(&mut self, builtin: Builtin, args: &[String]) -> ExecutionResult {
        debug!(?builtin, context = %self.context, "Builtin dispatch");
        match builtin {
            Builtin::Quit => ExecutionResult::exit(),
            // At root these end the session rather than being a no-op
            Builtin::Exit | Builtin::Back => {
                if self.context.navigate_up() {
                    ExecutionResult::context_changed()
                } else {
                    ExecutionResult::exit()
                }
            }
            Builtin::Root => {
                let changed = !self.context.is_root();
                self.context.reset();
                ExecutionResult {
                    context_changed: changed,
                    ..ExecutionResult::default()
                }
            }
            Builtin::Clear => ExecutionResult::clear(),
            Builtin::Context => self.context_report(),
            Builtin::History => self.history_report(),
            Builtin::Version => ExecutionResult::line(version_line()),
            Builtin::Domains => ExecutionResult::lines(self.domain_listing()),
            Builtin::Help => match args.first() {
                None => self.help(),
                Some(topic) => self.help_topic(topic),
            },
        }
    }

    fn context_report(&self) -> ExecutionResult {
        ExecutionResult::lines([
            "Current Context:".to_string(),
            format!("  Domain:  {}", self.context.domain().unwrap_or("(root)")),
            format!("  Action:  {}", self.context.action().unwrap_or("(none)")),
            format!("  Path:    {}", self.context),
            format!("  Tier:    {}", self.tier),
        ])
    }

    fn history_report(&self) -> ExecutionResult {
        let entries = self.history.entries();
        if entries.is_empty() {
            return ExecutionResult::line("No history");
        }
        let skip = entries.len().saturating_sub(self.history_display);
        ExecutionResult::lines(
            entries
                .iter()
                .enumerate()
                .skip(skip)
                .map(|(i, entry)| format!("{:4}  {}", i + 1, entry)),
        )
    }

    /// Every domain name, generated and custom, sorted; preview domains are badged.
    pub(super) fn domain_listing(&self) -> Vec<String> {
        let mut names: BTreeMap<String, &str> = self
            .registry
            .all_domains()
            .into_iter()
            .map(|d| (d.name.clone(), if d.is_preview { " [PREVIEW]" } else { "" }))
            .collect();
        for custom in self.custom.all() {
            names.insert(custom.name, "");
        }
        names
            .into_iter()
            .map(|(name, badge)| format!("{}{}", name, badge))
            .collect()
    }

    fn help(&self) -> ExecutionResult {
        if self.context.is_root() {
            self.root_help()
        } else {
            self.context_help()
        }
    }

    fn root_help(&self) -> ExecutionResult {
        let mut lines = vec![
            "xcsh interactive shell".to_string(),
            String::new(),
            "Navigation:".to_string(),
            "  <domain>          Enter a domain context (e.g. load_balancer, lb)".to_string(),
            "  <action>          Enter an action context inside a domain (e.g. list)".to_string(),
            "  /<domain> [...]   Jump to a domain from anywhere".to_string(),
            "  exit              Go up one level (or exit the shell at root)".to_string(),
            "  back, ..          Go up one level".to_string(),
            "  root, /           Return to root context".to_string(),
            "  quit              Exit the shell".to_string(),
            String::new(),
            "Built-in commands:".to_string(),
        ];
        for keyword in ["help", "clear", "context", "history", "version", "domains"] {
            if let Some(description) = Builtin::description(keyword) {
                lines.push(format!("  {:<17} {}", keyword, description));
            }
        }
        lines.push(String::new());
        lines.push("Domains:".to_string());
        lines.extend(self.domain_listing().into_iter().map(|d| format!("  {}", d)));
        ExecutionResult::lines(lines)
    }

    fn context_help(&self) -> ExecutionResult {
        let mut lines = vec![format!("Context: {}", self.context), String::new()];
        match (self.context.domain(), self.context.action()) {
            (Some(domain), None) => {
                lines.push(format!("Available actions in '{}':", domain));
                for (action, description) in ACTION_HELP {
                    lines.push(format!("  {:<17} {}", action, description));
                }
                let resources = self.registry.resources_in_domain(domain);
                if !resources.is_empty() {
                    lines.push(String::new());
                    lines.push("Resource types:".to_string());
                    for rt in resources {
                        lines.push(format!("  {:<32} {}", rt.cli_name, rt.description));
                    }
                }
                lines.push(String::new());
                lines.push("Navigation:".to_string());
                lines.push("  exit, back, ..    Return to root".to_string());
                lines.push("  <action>          Enter action context".to_string());
            }
            (Some(domain), Some(action)) => {
                lines.push(format!(
                    "Commands run as: {} {} <resource-type> [name] [flags]",
                    domain, action
                ));
                lines.push(String::new());
                lines.push("Navigation:".to_string());
                lines.push("  exit, back, ..    Return to domain context".to_string());
                lines.push("  root, /           Return to root".to_string());
            }
            _ => {}
        }
        ExecutionResult::lines(lines)
    }

    fn help_topic(&self, topic: &str) -> ExecutionResult {
        if let Some(description) = Builtin::description(topic) {
            return ExecutionResult::line(format!("{}: {}", topic, description));
        }
        if ACTION_VERBS.contains(&topic) {
            return ExecutionResult::line(format!(
                "{}: action verb; usage: <domain> {} <resource-type> [name] [flags]",
                topic, topic
            ));
        }
        match self.resolve(topic) {
            Resolution::Custom(name) => {
                let description = self
                    .custom
                    .all()
                    .into_iter()
                    .find(|d| d.name == name)
                    .map(|d| d.description)
                    .unwrap_or_default();
                ExecutionResult::line(format!("{} (custom domain): {}", name, description))
            }
            Resolution::Domain(canonical) => self.domain_help(&canonical),
            Resolution::Unknown => {
                ExecutionResult::failed(ShellError::UnknownBuiltin(topic.to_string()))
            }
        }
    }

    fn domain_help(&self, domain: &str) -> ExecutionResult {
        let Some(info) = self.registry.domain_info(domain) else {
            return ExecutionResult::failed(ShellError::UnknownDomain(domain.to_string()));
        };
        let mut lines = vec![
            format!("{} ({})", info.display_name, info.name),
            format!("  {}", info.description),
            format!("  Category: {}", info.category),
            format!("  Tier:     {}", info.required_tier),
        ];
        if !info.aliases.is_empty() {
            lines.push(format!("  Aliases:  {}", info.aliases.join(", ")));
        }
        if let Some(warning) = self.registry.preview_warning(domain) {
            lines.push(format!("  {}", warning));
        }
        if !info.use_cases.is_empty() {
            lines.push("  Use cases:".to_string());
            lines.extend(info.use_cases.iter().map(|uc| format!("    - {}", uc)));
        }
        ExecutionResult::lines(lines)
    }
}
