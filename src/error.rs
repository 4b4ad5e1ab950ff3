//! Error types for profile card loading, validation, and installation.

use thiserror::Error;

/// Errors raised at the loading boundary. Once a card is loaded and
/// validated, no fallible operation remains: field access, view
/// construction, and handle reads cannot fail.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed:\n{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile already installed for this process")]
    AlreadyInstalled,
}

impl From<config::ConfigError> for CardError {
    fn from(err: config::ConfigError) -> Self {
        CardError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CardError {
    fn from(err: toml::ser::Error) -> Self {
        CardError::Config(err.to_string())
    }
}
