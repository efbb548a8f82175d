//! Error types for recompose-extensions

use std::path::PathBuf;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a catalog.
///
/// An unreadable directory aborts the whole scan; an individual malformed
/// metadata file never does (those are skipped with a warning).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The scan root does not exist or is not a directory.
    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory could not be listed.
    #[error("failed to list {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
}
