//! Error types for configuration operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or storing the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to load configuration from {path}")]
    LoadPath {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("failed to save configuration to {path}")]
    SavePath {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to resolve configuration path")]
    ResolvePath(#[source] confy::ConfyError),
}
