//! Error types for recompose-reconcile

use std::path::PathBuf;

/// Result type for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a requirement set.
///
/// Reconciliation itself is total: once a catalog and a requirement set
/// exist, classification cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest document could not be read.
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest document is not valid JSON.
    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),
}
