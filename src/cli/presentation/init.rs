//! Init presentation: preview and summary formatters.

use crate::init::InitSummary;
use std::path::Path;

pub fn format_init_preview(target: &Path, contents: &str) -> String {
    format!("Would write {}:\n\n{}", target.display(), contents)
}

pub fn format_init_summary(summary: &InitSummary) -> String {
    let mut output = String::new();
    if !summary.created.is_empty() {
        output.push_str(&format!("Created ({}):\n", summary.created.len()));
        for path in &summary.created {
            output.push_str(&format!("  {}\n", path));
        }
    }
    if !summary.skipped.is_empty() {
        output.push_str(&format!(
            "Skipped ({}), use --force to overwrite:\n",
            summary.skipped.len()
        ));
        for path in &summary.skipped {
            output.push_str(&format!("  {}\n", path));
        }
    }
    if output.is_empty() {
        output.push_str("Nothing to do.\n");
    }
    output
}
