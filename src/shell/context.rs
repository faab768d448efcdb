//! Navigation context: root, domain, or domain plus action.

use crate::error::ShellError;
use std::fmt;
use tracing::debug;

/// Current position of a shell session.
///
/// Starts at `Root`. Levels cannot be skipped: an action is only accepted once a
/// domain is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContextPath {
    #[default]
    Root,
    DomainSelected(String),
    ActionSelected(String, String),
}

impl ContextPath {
    pub fn new() -> Self {
        Self::Root
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::DomainSelected(_))
    }

    pub fn is_action(&self) -> bool {
        matches!(self, Self::ActionSelected(_, _))
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::DomainSelected(d) | Self::ActionSelected(d, _) => Some(d),
        }
    }

    pub fn action(&self) -> Option<&str> {
        match self {
            Self::ActionSelected(_, a) => Some(a),
            _ => None,
        }
    }

    /// Select a domain, dropping any selected action.
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        let domain = domain.into();
        debug!(from = %self, to = %domain, "Context set domain");
        *self = Self::DomainSelected(domain);
    }

    /// Select an action within the current domain.
    ///
    /// At an action level the action is replaced. At root this is rejected.
    pub fn set_action(&mut self, action: impl Into<String>) -> Result<(), ShellError> {
        let action = action.into();
        match self {
            Self::Root => Err(ShellError::InvalidNavigation(format!(
                "cannot select action '{}' without a domain",
                action
            ))),
            Self::DomainSelected(d) | Self::ActionSelected(d, _) => {
                let domain = std::mem::take(d);
                debug!(domain = %domain, action = %action, "Context set action");
                *self = Self::ActionSelected(domain, action);
                Ok(())
            }
        }
    }

    /// Move one level up. Returns false when already at root.
    pub fn navigate_up(&mut self) -> bool {
        let next = match std::mem::take(self) {
            Self::Root => return false,
            Self::DomainSelected(_) => Self::Root,
            Self::ActionSelected(d, _) => Self::DomainSelected(d),
        };
        debug!(to = %next, "Context navigate up");
        *self = next;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::Root;
    }

    /// Tokens prepended to forwarded commands: `[domain]` or `[domain, action]`.
    pub fn prefix(&self) -> Vec<String> {
        match self {
            Self::Root => Vec::new(),
            Self::DomainSelected(d) => vec![d.clone()],
            Self::ActionSelected(d, a) => vec![d.clone(), a.clone()],
        }
    }
}

impl fmt::Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "/"),
            Self::DomainSelected(d) => write!(f, "{}", d),
            Self::ActionSelected(d, a) => write!(f, "{}/{}", d, a),
        }
    }
}
