//! Global config file source: $XDG_CONFIG_HOME/linkcard/config.toml or
//! ~/.config/linkcard/config.toml

use crate::config::paths;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use tracing::debug;

/// Add the global config file source to the builder when the file exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = paths::global_config_path() {
        if global_path.exists() {
            let canonical_path = global_path
                .canonicalize()
                .unwrap_or_else(|_| global_path.clone());
            builder = builder
                .add_source(File::with_name(canonical_path.to_str().unwrap()).required(false));
        } else {
            debug!(
                config_path = %global_path.display(),
                "No global profile configuration found; the built-in card \
                 applies unless a workspace file overrides it."
            );
        }
    }
    Ok(builder)
}
