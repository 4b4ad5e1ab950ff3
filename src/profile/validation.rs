//! Structural validation for profile cards.
//!
//! The one-shot load-time pass standing in for the build-time shape check
//! the card would get in a typed configuration language: required fields
//! present and non-empty. Duplicate link labels or icons are structurally
//! permitted and not reported.

use crate::config::ValidationError;
use crate::profile::card::ProfileConfig;

/// Validate a card. Collects every failure rather than stopping at the
/// first so a single run reports the full repair list.
pub fn validate_card(card: &ProfileConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if card.avatar.trim().is_empty() {
        errors.push(ValidationError::Profile(
            "avatar must not be empty".to_string(),
        ));
    }
    if card.name.trim().is_empty() {
        errors.push(ValidationError::Profile(
            "name must not be empty".to_string(),
        ));
    }

    for (index, link) in card.links.iter().enumerate() {
        let label = if link.name.trim().is_empty() {
            format!("#{}", index + 1)
        } else {
            link.name.clone()
        };

        if link.name.trim().is_empty() {
            errors.push(ValidationError::Link(
                label.clone(),
                "name must not be empty".to_string(),
            ));
        }
        if link.icon.as_str().trim().is_empty() {
            errors.push(ValidationError::Link(
                label.clone(),
                "icon must not be empty".to_string(),
            ));
        }
        if link.url.trim().is_empty() {
            errors.push(ValidationError::Link(
                label,
                "url must not be empty".to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
