//! Validation presentation: structural check report text/json.

use crate::config::ValidationError;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_validate_text(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        format!("{} profile card is structurally valid", "ok:".green())
    } else {
        let mut output = format!("{} {} validation error(s):", "error:".red(), errors.len());
        for e in errors {
            output.push_str(&format!("\n  - {}", e));
        }
        output
    }
}

pub fn format_validate_json(errors: &[ValidationError]) -> String {
    let error_list: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    let out = json!({ "valid": errors.is_empty(), "errors": error_list });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
