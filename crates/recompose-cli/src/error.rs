//! Error types for recompose-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the extension catalog
    #[error(transparent)]
    Extensions(#[from] recompose_extensions::Error),

    /// Error from the reconciler
    #[error(transparent)]
    Reconcile(#[from] recompose_reconcile::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
