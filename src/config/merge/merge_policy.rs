//! Merge rules: defaults, override order, conflict handling.

use crate::config::LinkcardConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder seeded with the built-in card and logging
/// defaults. Sources added afterwards override key by key; authored link
/// lists replace the default list wholesale.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&LinkcardConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
