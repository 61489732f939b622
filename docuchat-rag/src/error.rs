//! Error types for the `docuchat-rag` crate.

use thiserror::Error;

/// Errors that can occur in chunking, embedding, and retrieval operations.
#[derive(Debug, Error)]
pub enum RagError {
    /// A configuration validation error (bad chunking parameters, zero top-k).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The persistence directory or collection file is unreachable or corrupt.
    #[error("Store unavailable at '{path}': {message}")]
    StoreUnavailable {
        /// The filesystem path that could not be used.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// The embedding service call failed. Not retried internally.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;
