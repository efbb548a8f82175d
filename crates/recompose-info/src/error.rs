//! Error types for recompose-info

/// Result type for metadata parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing extension metadata.
///
/// Callers treat any parse failure as "this file is not an extension" and
/// skip the file; a parse error never aborts a directory scan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured metadata was not valid YAML.
    #[error("failed to parse structured metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Structured metadata parsed, but the document root is not a mapping.
    #[error("structured metadata root is not a mapping")]
    NotAMapping,
}
