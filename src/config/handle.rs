//! Process-wide install slot for the loaded configuration.
//!
//! The card is loaded during startup, installed exactly once, and read
//! for the rest of the process lifetime. Reads are lock-free and return
//! the same `&'static` reference every time; there is no reload path.

use crate::config::LinkcardConfig;
use crate::error::CardError;
use once_cell::sync::OnceCell;

static INSTALLED: OnceCell<LinkcardConfig> = OnceCell::new();

/// Install the loaded configuration for this process. A second install is
/// rejected; the first value stays in place.
pub fn install(config: LinkcardConfig) -> Result<&'static LinkcardConfig, CardError> {
    INSTALLED
        .try_insert(config)
        .map_err(|_| CardError::AlreadyInstalled)
}

/// The installed configuration, when `install` has run.
pub fn global() -> Option<&'static LinkcardConfig> {
    INSTALLED.get()
}
