//! Configuration loading facade.

use crate::config::merge::merge_policy;
use crate::config::paths;
use crate::config::sources::{global_file, workspace_file};
use crate::config::LinkcardConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Loads the layered configuration stack.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    /// Precedence (lowest to highest): built-in defaults, global XDG
    /// config, workspace files, `LINKCARD__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<LinkcardConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder = builder.add_source(
            Environment::with_prefix("LINKCARD")
                .prefix_separator("__")
                .separator("__"),
        );
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a single file, skipping the layer stack.
    /// Sections the file omits fall back to the built-in defaults.
    pub fn load_from_file(path: &Path) -> Result<LinkcardConfig, ConfigError> {
        let path_str = path.to_str().ok_or_else(|| {
            ConfigError::Message(format!("Non-UTF8 config path: {}", path.display()))
        })?;
        merge_policy::builder_with_defaults()?
            .add_source(File::with_name(path_str).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the global config file, when resolvable.
    pub fn xdg_config_path() -> Option<PathBuf> {
        paths::global_config_path()
    }
}
