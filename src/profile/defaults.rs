//! Built-in profile card used when no configuration files are present.

use crate::profile::card::ProfileConfig;
use crate::profile::link::LinkEntry;

/// The card a fresh process carries before any file or environment
/// override is applied. Also the content `linkcard init` writes into a
/// workspace starter file.
pub fn default_card() -> ProfileConfig {
    ProfileConfig {
        avatar: "/assets/images/avatar.webp".to_string(),
        name: "kakadou".to_string(),
        bio: "Hello, I'm kakadou.".to_string(),
        links: vec![
            LinkEntry::new(
                "Bilibili",
                "fa6-brands:bilibili",
                "https://space.bilibili.com/343141448",
                false,
            ),
            LinkEntry::new(
                "GitHub",
                "fa6-brands:github",
                "https://github.com/kakadou",
                false,
            ),
            LinkEntry::new("Email", "fa6-solid:envelope", "1265861794@qq.com", false),
            LinkEntry::new("RSS", "fa6-solid:rss", "/rss/", false),
        ],
    }
}
