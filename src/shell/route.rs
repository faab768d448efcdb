//! Command router: classifies one line of input and applies it to the session.

use super::builtins::{Builtin, DEFAULT_HISTORY_DISPLAY};
use super::context::ContextPath;
use super::custom::{CustomDomainSet, NoCustomDomains, Resolution, Session};
use super::forward::{CommandExecutor, DryRunExecutor, ForwardedCommand};
use super::history::{History, InMemoryHistory};
use super::parse::{is_action_verb, is_flag, parse_command, ParsedCommand, ACTION_VERBS};
use super::result::ExecutionResult;
use super::suggest::{Suggestion, SuggestionEngine};
use crate::error::{ApiError, ShellError};
use crate::registry::Registry;
use crate::tier::Tier;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// One shell session: navigation context plus its collaborators.
///
/// Classification order for each line, first match wins:
/// empty input, `/domain` direct navigation, built-in keyword, domain entry
/// at root, action entry inside a domain, forwarded command.
pub struct CommandRouter {
    pub(super) registry: Arc<Registry>,
    pub(super) context: ContextPath,
    pub(super) custom: Box<dyn CustomDomainSet>,
    pub(super) history: Box<dyn History>,
    pub(super) executor: Box<dyn CommandExecutor>,
    pub(super) tier: Tier,
    pub(super) history_display: usize,
    pub(super) namespace: Option<String>,
}

impl CommandRouter {
    /// Router at root with no custom domains, in-memory history and a dry-run executor.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            executor: Box::new(DryRunExecutor::new(Arc::clone(&registry))),
            registry,
            context: ContextPath::Root,
            custom: Box::new(NoCustomDomains),
            history: Box::new(InMemoryHistory::default()),
            tier: Tier::default(),
            history_display: DEFAULT_HISTORY_DISPLAY,
            namespace: None,
        }
    }

    pub fn with_custom_domains(mut self, custom: impl CustomDomainSet + 'static) -> Self {
        self.custom = Box::new(custom);
        self
    }

    pub fn with_history(mut self, history: impl History + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn with_executor(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Number of entries the `history` built-in shows.
    pub fn with_history_display(mut self, count: usize) -> Self {
        self.history_display = count;
        self
    }

    /// Namespace added to forwarded commands that name a namespaced resource
    /// without `-n`.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.is_empty());
        self
    }

    pub fn context(&self) -> &ContextPath {
        &self.context
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn history_entries(&self) -> Vec<String> {
        self.history.entries()
    }

    pub fn persist_history(&self) -> Result<(), ApiError> {
        self.history.persist()
    }

    pub fn session(&self) -> Session<'_> {
        Session {
            context: &self.context,
            registry: &self.registry,
            tier: self.tier,
        }
    }

    /// Look `name` up, custom domains first.
    pub fn resolve(&self, name: &str) -> Resolution {
        let custom = self.custom.contains(name);
        match (custom, self.registry.resolve_domain(name)) {
            (true, Some(generated)) => {
                warn!(
                    name,
                    generated, "Custom domain shadows a generated domain name"
                );
                Resolution::Custom(name.to_string())
            }
            (true, None) => Resolution::Custom(name.to_string()),
            (false, Some(canonical)) => Resolution::Domain(canonical.to_string()),
            (false, None) => Resolution::Unknown,
        }
    }

    /// Completion candidates for `partial` in the current context.
    pub fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        SuggestionEngine::new(&self.registry, self.custom.as_ref()).suggest(&self.context, partial)
    }

    /// Execute one line of input. Never fails; errors come back in the result.
    pub fn execute(&mut self, input: &str) -> ExecutionResult {
        let parsed = parse_command(input);
        let Some(head) = parsed.head().map(str::to_string) else {
            return ExecutionResult::empty();
        };

        if parsed.is_navigation {
            debug!(input = %parsed.raw, "Classified as direct navigation");
            return self.direct_navigation(&head, &parsed);
        }

        if let Some(builtin) = Builtin::from_keyword(&head) {
            return self.run_builtin(builtin, parsed.rest());
        }

        if self.context.is_root() {
            match self.resolve(&head) {
                Resolution::Custom(name) => {
                    debug!(domain = %name, "Classified as custom domain");
                    return self.run_custom(&name, parsed.rest());
                }
                Resolution::Domain(canonical) => {
                    debug!(domain = %canonical, "Classified as domain entry");
                    return self.enter_domain(&canonical, &parsed);
                }
                Resolution::Unknown => {}
            }
        }

        if let ContextPath::DomainSelected(domain) = &self.context {
            if !is_flag(&head) {
                debug!(action = %head, "Classified as action entry");
                let domain = domain.clone();
                return self.navigate(&domain, Some(&head), parsed.rest(), &parsed.raw);
            }
        }

        debug!(input = %parsed.raw, context = %self.context, "Classified as forwarded command");
        let mut args = self.context.prefix();
        args.extend(parsed.args.iter().cloned());
        self.forward(&args, &parsed.raw)
    }

    fn direct_navigation(&mut self, head: &str, parsed: &ParsedCommand) -> ExecutionResult {
        match self.resolve(head) {
            Resolution::Custom(name) => self.run_custom(&name, parsed.rest()),
            Resolution::Domain(canonical) => self.enter_domain(&canonical, parsed),
            Resolution::Unknown => match Builtin::from_keyword(head) {
                // `/quit`, `/root` and friends
                Some(builtin) => self.run_builtin(builtin, parsed.rest()),
                None => ExecutionResult::failed(ShellError::UnknownDomain(head.to_string())),
            },
        }
    }

    fn run_custom(&mut self, name: &str, args: &[String]) -> ExecutionResult {
        let session = Session {
            context: &self.context,
            registry: &self.registry,
            tier: self.tier,
        };
        self.custom.execute(name, args, &session)
    }

    /// Enter `domain` from any position; a following non-flag token selects
    /// the action and anything after that is forwarded.
    fn enter_domain(&mut self, domain: &str, parsed: &ParsedCommand) -> ExecutionResult {
        let rest = parsed.rest();
        match rest.split_first() {
            Some((action, tail)) if !is_flag(action) => {
                self.navigate(domain, Some(action), tail, &parsed.raw)
            }
            _ => self.navigate(domain, None, rest, &parsed.raw),
        }
    }

    /// Select `domain` (and `action`), then forward `rest` if any.
    ///
    /// The forwarded part is resolved before the context changes, so a bad
    /// command leaves the session and its history where they were.
    fn navigate(
        &mut self,
        domain: &str,
        action: Option<&str>,
        rest: &[String],
        raw: &str,
    ) -> ExecutionResult {
        let target = match action {
            Some(action) => ContextPath::ActionSelected(domain.to_string(), action.to_string()),
            None => ContextPath::DomainSelected(domain.to_string()),
        };
        let command = if rest.is_empty() {
            None
        } else {
            let mut args = target.prefix();
            args.extend(rest.iter().cloned());
            match self.resolve_forwarded(&args) {
                Ok(command) => Some(command),
                Err(e) => {
                    debug!(error = %e, "Forwarded command rejected");
                    return ExecutionResult::failed(e);
                }
            }
        };

        let mut result = ExecutionResult {
            context_changed: target != self.context,
            ..ExecutionResult::default()
        };
        if self.context.domain() != Some(domain) {
            if let Some(warning) = self.registry.tier_warning(domain, self.tier) {
                result = result.with_line(format!("Warning: {}", warning));
            }
            if let Some(warning) = self.registry.preview_warning(domain) {
                result = result.with_line(warning);
            }
        }
        if let Some(action) = action.filter(|a| !is_action_verb(a)) {
            result = result.with_line(format!(
                "Warning: '{}' is not a known action (expected one of: {})",
                action,
                ACTION_VERBS.join(", ")
            ));
        }

        debug!(from = %self.context, to = %target, "Context transition");
        self.context.set_domain(domain);
        if let Some(action) = action {
            if let Err(e) = self.context.set_action(action) {
                return ExecutionResult::failed(e);
            }
        }

        match command {
            Some(command) => {
                self.history.append(raw.to_string());
                result.merge(self.executor.execute(&command))
            }
            None => result,
        }
    }

    fn forward(&mut self, args: &[String], raw: &str) -> ExecutionResult {
        match self.resolve_forwarded(args) {
            Ok(command) => {
                debug!(command = %command.command_line(), "Forwarding command");
                self.history.append(raw.to_string());
                self.executor.execute(&command)
            }
            Err(e) => {
                debug!(error = %e, "Forwarded command rejected");
                ExecutionResult::failed(e)
            }
        }
    }

    fn resolve_forwarded(&self, args: &[String]) -> Result<ForwardedCommand, ShellError> {
        let mut command = ForwardedCommand::resolve(&self.registry, args)?;
        if let Some(namespace) = self.namespace.as_deref() {
            command.apply_default_namespace(&self.registry, namespace);
        }
        Ok(command)
    }
}

impl fmt::Debug for CommandRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRouter")
            .field("context", &self.context)
            .field("tier", &self.tier)
            .field("history_display", &self.history_display)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
