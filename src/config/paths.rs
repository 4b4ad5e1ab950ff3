//! XDG path resolution for the global config file.

use std::path::PathBuf;

/// User configuration root. Honors $XDG_CONFIG_HOME when set and
/// non-empty, otherwise falls back to ~/.config. None when neither
/// variable resolves.
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Directory holding linkcard's user-level configuration.
pub fn linkcard_config_dir() -> Option<PathBuf> {
    config_home().map(|root| root.join("linkcard"))
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    linkcard_config_dir().map(|dir| dir.join("config.toml"))
}
