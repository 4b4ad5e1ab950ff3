//! Icon catalog identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespaced icon identifier (`<set>:<icon-id>`), resolved by an external
/// icon catalog. The value is stored verbatim and never checked against a
/// catalog; the two halves are available when the separator is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Icon set half (`fa6-brands` in `fa6-brands:github`), when namespaced.
    pub fn set(&self) -> Option<&str> {
        self.0.split_once(':').map(|(set, _)| set)
    }

    /// Icon id half (`github` in `fa6-brands:github`), when namespaced.
    pub fn icon_name(&self) -> Option<&str> {
        self.0.split_once(':').map(|(_, name)| name)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IconRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
