//! Error types for the deep-inspector CLI

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the CLI
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from inspector-core
    #[error(transparent)]
    Core(#[from] inspector_core::Error),

    /// Error from the HTTP service
    #[error(transparent)]
    Api(#[from] inspector_api::Error),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid use of a command
    #[error("{0}")]
    Usage(String),
}
