//! CLI presentation: tables, JSON and prompt rendering. Pure formatting; no I/O.

use crate::catalog::DomainInfo;
use crate::registry::{UseCaseMatch, WorkflowSuggestion};
use crate::shell::ContextPath;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Prompt for the current context: `xcsh>`, `xcsh:dns>`, `xcsh:dns/list>`.
pub fn format_prompt(prefix: &str, context: &ContextPath) -> String {
    match context {
        ContextPath::Root => format!("{}> ", prefix.green().bold()),
        ContextPath::DomainSelected(domain) => {
            format!("{}:{}> ", prefix.green().bold(), domain.cyan())
        }
        ContextPath::ActionSelected(domain, action) => format!(
            "{}:{}/{}> ",
            prefix.green().bold(),
            domain.cyan(),
            action.yellow()
        ),
    }
}

/// Render an error line in red.
pub fn format_error_line(message: &str) -> String {
    format!("{}", message.red())
}

pub fn format_domains_text(domains: &[&DomainInfo]) -> String {
    if domains.is_empty() {
        return "No domains found".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Domain", "Name", "Category", "Tier", "Aliases"]);
    for info in domains {
        let name = if info.is_preview {
            format!("{} [PREVIEW]", info.name)
        } else {
            info.name.clone()
        };
        table.add_row(vec![
            name,
            info.display_name.clone(),
            info.category.clone(),
            info.required_tier.to_string(),
            info.aliases.join(", "),
        ]);
    }
    format!(
        "{}\n\n{}\n\n{} domain(s)",
        format_section_heading("Domains"),
        table,
        domains.len()
    )
}

pub fn format_domains_json(domains: &[&DomainInfo]) -> String {
    let value = json!({
        "domains": domains,
        "count": domains.len(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_related_text(
    domain: &DomainInfo,
    related: &[(&str, u32)],
    workflows: &[WorkflowSuggestion],
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Related to {} ({})", domain.display_name, domain.name))
    ));
    if related.is_empty() {
        out.push_str("  No related domains\n\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Domain", "Score"]);
        for (name, score) in related {
            table.add_row(vec![name.to_string(), score.to_string()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    out.push_str(&format!("{}\n\n", format_section_heading("Workflows")));
    if workflows.is_empty() {
        out.push_str("  No workflows\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Workflow", "Category", "Domains", "Score"]);
        for workflow in workflows {
            table.add_row(vec![
                workflow.name.clone(),
                workflow.category.clone(),
                workflow.domains.join(", "),
                workflow.score.to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

pub fn format_related_json(
    domain: &DomainInfo,
    related: &[(&str, u32)],
    workflows: &[WorkflowSuggestion],
) -> String {
    let related: Vec<_> = related
        .iter()
        .map(|(name, score)| json!({ "domain": name, "score": score }))
        .collect();
    let value = json!({
        "domain": domain.name,
        "related": related,
        "workflows": workflows,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_search_text(query: &str, matches: &[UseCaseMatch]) -> String {
    if matches.is_empty() {
        return format!("No use cases match '{}'", query);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Domain", "Use case"]);
    for m in matches {
        table.add_row(vec![m.domain.clone(), m.use_case.clone()]);
    }
    format!(
        "{}\n\n{}",
        format_section_heading(&format!("Use cases matching '{}'", query)),
        table
    )
}

pub fn format_search_json(query: &str, matches: &[UseCaseMatch]) -> String {
    let value = json!({
        "query": query,
        "matches": matches,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}
