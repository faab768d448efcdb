//! CLI domain: parse, route, output, and presentation only.
//! The shell core lives in `crate::shell`; this layer wires it to stdin/stdout.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_domains_json, format_domains_text, format_error_line, format_prompt,
    format_related_json, format_related_text, format_search_json, format_search_text,
    format_section_heading,
};
pub use route::{default_custom_domains, RunContext, CLEAR_SCREEN};
