//! Settings and team table loading.
//!
//! Settings come from an optional TOML file; every key falls back to the
//! built-in defaults for the OpenShift bug tracker.

mod error;
mod settings;
mod teams;

pub use error::ConfigError;
pub use settings::{FieldIds, Settings};
pub use teams::{Team, TeamTable};

use std::path::Path;
use tracing::info;

/// Loads settings from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed, or fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading settings file");
            Settings::load(path)
        }
        None => Ok(Settings::default()),
    }
}
