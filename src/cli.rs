//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; a single route table dispatches to library calls.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_card_json, format_card_text, format_init_preview, format_init_summary,
    format_links_json, format_links_text, format_validate_json, format_validate_text,
};
pub use route::RunContext;
