//! Error types for export operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors while writing one export artifact
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compress {path}")]
    Compress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest {path}")]
    SerializeManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("export name {name:?} is not a single folder name")]
    InvalidName { name: String },

    #[error("nothing to export for {artifact}")]
    NothingToExport { artifact: &'static str },
}
