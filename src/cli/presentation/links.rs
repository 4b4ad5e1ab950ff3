//! Link presentation: rendered link views as a table or json.

use crate::views::LinkView;
use comfy_table::Table;
use serde_json::json;

pub fn format_links_text(items: &[LinkView]) -> String {
    if items.is_empty() {
        return "No links configured.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Icon", "Label", "Target"]);
    for item in items {
        table.add_row(vec![
            item.icon.as_str().to_string(),
            item.label.clone().unwrap_or_default(),
            item.href.clone(),
        ]);
    }
    format!("{}\n\nTotal: {} link(s)", table, items.len())
}

pub fn format_links_json(items: &[LinkView]) -> String {
    let out = json!({ "links": items, "total": items.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
