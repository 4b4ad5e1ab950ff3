//! CLI presentation: text and json formatters per command family.

mod card;
mod init;
mod links;
mod validate;

pub use card::{format_card_json, format_card_text};
pub use init::{format_init_preview, format_init_summary};
pub use links::{format_links_json, format_links_text};
pub use validate::{format_validate_json, format_validate_text};
