//! Completion candidates for partial input.

use super::builtins::BUILTIN_KEYWORDS;
use super::context::ContextPath;
use super::custom::CustomDomainSet;
use crate::registry::Registry;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    CustomDomain,
    Domain,
    Builtin,
    Action,
    Navigation,
    Flag,
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CustomDomain => "custom domain",
            Self::Domain => "domain",
            Self::Builtin => "builtin",
            Self::Action => "action",
            Self::Navigation => "navigation",
            Self::Flag => "flag",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub description: String,
    pub category: SuggestionCategory,
}

impl Suggestion {
    fn new(text: &str, description: &str, category: SuggestionCategory) -> Self {
        Self {
            text: text.to_string(),
            description: description.to_string(),
            category,
        }
    }
}

const DOMAIN_VERBS: [(&str, &str); 5] = [
    ("list", "List resources"),
    ("get", "Get a specific resource"),
    ("create", "Create a new resource"),
    ("delete", "Delete a resource"),
    ("update", "Replace an existing resource"),
];

const ACTION_NAVIGATION: [(&str, &str); 4] = [
    ("exit", "Go up to domain context"),
    ("back", "Go up to domain context"),
    ("..", "Go up to domain context"),
    ("root", "Go to root context"),
];

const COMMON_FLAGS: [(&str, &str); 5] = [
    ("--namespace", "Target namespace"),
    ("--name", "Resource name"),
    ("--file", "Read the request body from a file"),
    ("--output-format", "Output format (json, yaml, table)"),
    ("--help", "Show command help"),
];

/// Ranks completion candidates against partial input and the current context.
pub struct SuggestionEngine<'a> {
    registry: &'a Registry,
    custom: &'a dyn CustomDomainSet,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(registry: &'a Registry, custom: &'a dyn CustomDomainSet) -> Self {
        Self { registry, custom }
    }

    /// Case-insensitive prefix matches; empty input matches everything.
    pub fn suggest(&self, context: &ContextPath, partial: &str) -> Vec<Suggestion> {
        let prefix = partial.trim_start().to_lowercase();
        let candidates = match context {
            ContextPath::Root => self.root_candidates(&prefix),
            ContextPath::DomainSelected(_) => table(&DOMAIN_VERBS, SuggestionCategory::Action),
            ContextPath::ActionSelected(_, _) => {
                let mut candidates = table(&ACTION_NAVIGATION, SuggestionCategory::Navigation);
                candidates.extend(table(&COMMON_FLAGS, SuggestionCategory::Flag));
                candidates
            }
        };
        candidates
            .into_iter()
            .filter(|s| matches_prefix(&s.text, &prefix))
            .collect()
    }

    fn root_candidates(&self, prefix: &str) -> Vec<Suggestion> {
        let mut custom = self.custom.all();
        custom.sort_by(|a, b| a.name.cmp(&b.name));
        let custom_names: BTreeSet<String> = custom.iter().map(|d| d.name.clone()).collect();

        let mut candidates: Vec<Suggestion> = custom
            .iter()
            .map(|d| Suggestion::new(&d.name, &d.description, SuggestionCategory::CustomDomain))
            .collect();

        for info in self.registry.all_domains() {
            if custom_names.contains(&info.name) {
                continue;
            }
            let mut description = info.description.clone();
            if info.is_preview {
                description.push_str(" [PREVIEW]");
            }
            // Offer an alias only when the canonical name does not match
            let text = if matches_prefix(&info.name, prefix) {
                info.name.as_str()
            } else {
                match info
                    .aliases
                    .iter()
                    .find(|a| matches_prefix(a, prefix) && !custom_names.contains(*a))
                {
                    Some(alias) => alias.as_str(),
                    None => continue,
                }
            };
            candidates.push(Suggestion::new(text, &description, SuggestionCategory::Domain));
        }

        candidates.extend(table(&BUILTIN_KEYWORDS, SuggestionCategory::Builtin));
        candidates
    }
}

fn table(entries: &[(&str, &str)], category: SuggestionCategory) -> Vec<Suggestion> {
    entries
        .iter()
        .map(|(text, description)| Suggestion::new(text, description, category))
        .collect()
}

fn matches_prefix(text: &str, lowercase_prefix: &str) -> bool {
    text.to_lowercase().starts_with(lowercase_prefix)
}
