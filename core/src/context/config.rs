//! Observer configuration
//!
//! Re-exports the shared config type from observer-types and adds confy
//! persistence on top of it.

use std::path::{Path, PathBuf};

pub use observer_types::ObserverConfig;

use super::ConfigError;

pub const APP_NAME: &str = "match-observer";
pub const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// ObserverConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for ObserverConfig persistence
pub trait ObserverConfigExt: Sized {
    /// Load the stored config, falling back to defaults when it is missing
    /// or unreadable.
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;

    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
}

impl ObserverConfigExt for ObserverConfig {
    fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, ConfigError> {
        confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::Load)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self.clone()).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::ResolvePath)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path(path).map_err(|source| ConfigError::LoadPath {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self.clone()).map_err(|source| ConfigError::SavePath {
            path: path.to_path_buf(),
            source,
        })
    }
}
