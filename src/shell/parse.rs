//! Input tokenization and first-pass classification.

use super::builtins::Builtin;

/// Verbs accepted as actions inside a domain.
pub const ACTION_VERBS: [&str; 11] = [
    "list",
    "get",
    "create",
    "delete",
    "replace",
    "apply",
    "status",
    "patch",
    "add-labels",
    "remove-labels",
    "update",
];

pub fn is_action_verb(token: &str) -> bool {
    ACTION_VERBS.contains(&token)
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// One line of input after tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Trimmed input line
    pub raw: String,
    /// Tokens; for `/domain ...` input the leading `/` is stripped from the first token
    pub args: Vec<String>,
    /// First token is a built-in keyword
    pub is_builtin: bool,
    /// Input is a `/`-prefixed direct navigation form (length > 1)
    pub is_navigation: bool,
}

impl ParsedCommand {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn head(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn rest(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }
}

/// Split on whitespace, keeping `'...'` and `"..."` spans together.
///
/// Quote characters are dropped; a quote of the other kind inside a quoted
/// span is kept literally. An unterminated quote runs to end of input.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for c in input.chars() {
        match (c, quote) {
            ('"' | '\'', None) => {
                quote = Some(c);
                in_token = true;
            }
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (c, _) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        args.push(current);
    }
    args
}

pub fn parse_command(input: &str) -> ParsedCommand {
    let raw = input.trim();
    let mut args = tokenize(raw);

    let is_navigation = raw.len() > 1 && raw.starts_with('/') && !raw.starts_with("/ ");
    if is_navigation {
        if let Some(first) = args.first_mut() {
            *first = first.trim_start_matches('/').to_string();
        }
    }

    let is_builtin = !is_navigation
        && args
            .first()
            .map(|head| Builtin::from_keyword(head).is_some())
            .unwrap_or(false);

    ParsedCommand {
        raw: raw.to_string(),
        args,
        is_builtin,
        is_navigation,
    }
}
