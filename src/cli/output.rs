//! CLI output: error to user-facing message mapping.

use crate::error::CardError;

/// Map an error to the message printed on stderr. Validation reports are
/// already formatted by presentation and pass through verbatim.
pub fn map_error(err: &CardError) -> String {
    match err {
        CardError::Validation(report) => report.clone(),
        other => format!("Error: {}", other),
    }
}
