//! Renderer Views
//!
//! Projects the profile card into the ordered display items a renderer
//! consumes. Deterministic: output order and length always match the
//! authored link list, and two calls on the same card are equal.

use crate::profile::{IconRef, LinkEntry, ProfileConfig};
use serde::{Deserialize, Serialize};

/// One renderable link item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    /// Label drawn next to the icon; `None` renders icon only
    pub label: Option<String>,

    /// Icon catalog identifier, passed through unresolved
    pub icon: IconRef,

    /// Resolved target: the authored URL, with bare contact addresses
    /// promoted to `mailto:` form
    pub href: String,
}

/// Build the ordered display items for a card's link list.
pub fn link_views(card: &ProfileConfig) -> Vec<LinkView> {
    card.links.iter().map(link_view).collect()
}

/// Build the display item for a single link entry.
pub fn link_view(link: &LinkEntry) -> LinkView {
    LinkView {
        label: if link.show_name {
            Some(link.name.clone())
        } else {
            None
        },
        icon: link.icon.clone(),
        href: resolve_href(&link.url),
    }
}

/// Promote a bare contact address to a `mailto:` URL; everything else is
/// returned as authored.
pub fn resolve_href(url: &str) -> String {
    if is_bare_email(url) {
        format!("mailto:{}", url)
    } else {
        url.to_string()
    }
}

/// A bare address contains `@` and carries neither a scheme nor a path
/// separator.
fn is_bare_email(url: &str) -> bool {
    url.contains('@') && !url.contains(':') && !url.contains('/')
}
