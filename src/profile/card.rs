//! Profile card schema owned by the profile domain.

use crate::config::ValidationError;
use crate::profile::link::LinkEntry;
use serde::{Deserialize, Serialize};

/// Personal profile card: avatar, display name, signature line, and the
/// outbound link list. Immutable after construction; consumers read it,
/// nothing mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Path or URL of the avatar image resource
    pub avatar: String,

    /// Display name
    pub name: String,

    /// Free-text signature line shown under the name
    pub bio: String,

    /// Outbound links, in display order. Order is meaningful and preserved
    /// exactly as authored.
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

impl ProfileConfig {
    /// Structural validation pass over the card.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        crate::profile::validation::validate_card(self)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        crate::profile::defaults::default_card()
    }
}
