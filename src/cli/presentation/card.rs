//! Card presentation: full profile text/json.

use crate::profile::ProfileConfig;
use serde_json::json;

pub fn format_card_text(card: &ProfileConfig) -> String {
    let mut output = format!("Name: {}\n", card.name);
    output.push_str(&format!("Bio: {}\n", card.bio));
    output.push_str(&format!("Avatar: {}\n", card.avatar));

    if card.links.is_empty() {
        output.push_str("\nNo links configured.\n");
    } else {
        output.push_str(&format!("\nLinks ({}):\n", card.links.len()));
        for link in &card.links {
            output.push_str(&format!(
                "  {:<12} {:<28} {}\n",
                link.name,
                link.icon.as_str(),
                link.url
            ));
        }
    }
    output
}

pub fn format_card_json(card: &ProfileConfig) -> String {
    let out = json!({
        "avatar": card.avatar,
        "name": card.name,
        "bio": card.bio,
        "links": card.links,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
