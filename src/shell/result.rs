//! Outcome of executing one line of input.

use crate::error::ShellError;
use serde::Serialize;

/// Structured result of one command.
///
/// The router always returns one of these; errors are carried in `error` as a
/// single explanatory line rather than propagated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub output_lines: Vec<String>,
    pub should_exit: bool,
    pub should_clear: bool,
    pub context_changed: bool,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output_lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line])
    }

    pub fn exit() -> Self {
        Self {
            output_lines: vec!["Goodbye!".to_string()],
            should_exit: true,
            ..Self::default()
        }
    }

    pub fn clear() -> Self {
        Self {
            should_clear: true,
            ..Self::default()
        }
    }

    pub fn context_changed() -> Self {
        Self {
            context_changed: true,
            ..Self::default()
        }
    }

    pub fn failed(error: ShellError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.output_lines.push(line.into());
        self
    }

    /// Append another result's output and flags; the first error wins.
    pub fn merge(mut self, other: ExecutionResult) -> Self {
        self.output_lines.extend(other.output_lines);
        self.should_exit |= other.should_exit;
        self.should_clear |= other.should_clear;
        self.context_changed |= other.context_changed;
        if self.error.is_none() {
            self.error = other.error;
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_result() {
        let result = ExecutionResult::exit();
        assert!(result.should_exit);
        assert_eq!(result.output_lines, vec!["Goodbye!"]);
        assert!(!result.context_changed);
    }

    #[test]
    fn test_failed_result_single_line() {
        let result = ExecutionResult::failed(ShellError::UnknownDomain("nope".into()));
        assert_eq!(result.error.as_deref(), Some("Unknown domain: nope"));
        assert!(result.output_lines.is_empty());
        assert!(result.is_error());
    }

    #[test]
    fn test_merge() {
        let merged = ExecutionResult::context_changed()
            .with_line("warning")
            .merge(ExecutionResult::line("would run: x"));
        assert!(merged.context_changed);
        assert_eq!(merged.output_lines, vec!["warning", "would run: x"]);
        assert!(ExecutionResult::empty().is_empty());
    }
}
