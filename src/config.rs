//! Configuration System
//!
//! Layered profile configuration: built-in defaults, global XDG file,
//! workspace files, then environment overrides. The merged value is loaded
//! once at startup, validated, and installed as a process-wide immutable
//! record; there is no reload path.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub use crate::profile::ProfileConfig;

mod facade;
mod handle;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use handle::{global, install};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkcardConfig {
    /// Profile card data
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Profile(String),
    Link(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Profile(msg) => {
                write!(f, "Profile: {}", msg)
            }
            ValidationError::Link(name, msg) => {
                write!(f, "Link '{}': {}", name, msg)
            }
            ValidationError::Logging(msg) => {
                write!(f, "Logging: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl LinkcardConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(profile_errors) = self.profile.validate() {
            errors.extend(profile_errors);
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
