//! Interactive shell core: navigation context, input parsing, routing,
//! history and completion.
//!
//! Everything here is synchronous and single-session; the shared state is the
//! [`Registry`](crate::registry::Registry) behind an `Arc`.

mod builtins;
mod context;
mod custom;
mod forward;
mod history;
mod parse;
mod result;
mod route;
mod suggest;

pub use builtins::{version_line, Builtin, BUILTIN_KEYWORDS, DEFAULT_HISTORY_DISPLAY};
pub use context::ContextPath;
pub use custom::{
    subscription_domain, CustomDomainSet, CustomDomainSummary, CustomDomains, NoCustomDomains,
    Resolution, Session,
};
pub use forward::{operation_for_verb, CommandExecutor, DryRunExecutor, ForwardedCommand};
pub use history::{History, HistoryManager, InMemoryHistory, DEFAULT_HISTORY_SIZE};
pub use parse::{is_action_verb, parse_command, tokenize, ParsedCommand, ACTION_VERBS};
pub use result::ExecutionResult;
pub use route::CommandRouter;
pub use suggest::{Suggestion, SuggestionCategory, SuggestionEngine};
