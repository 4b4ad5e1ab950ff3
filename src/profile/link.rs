//! Link entry domain type.

use crate::profile::icon::IconRef;
use serde::{Deserialize, Serialize};

/// One outbound link on the profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Human-readable label
    pub name: String,

    /// Icon catalog identifier, namespaced as `<set>:<icon-id>`
    pub icon: IconRef,

    /// Target URL. A bare contact address is kept exactly as authored;
    /// scheme resolution happens in the view layer.
    pub url: String,

    /// When true the renderer shows icon and label, otherwise icon only.
    /// Accepts the `showName` spelling used by data authored in camelCase.
    #[serde(default, alias = "showName")]
    pub show_name: bool,
}

impl LinkEntry {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<IconRef>,
        url: impl Into<String>,
        show_name: bool,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            url: url.into(),
            show_name,
        }
    }
}
