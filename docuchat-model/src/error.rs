//! Error types for the `docuchat-model` crate.

use thiserror::Error;

/// Errors that can occur when calling a generation model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The generation service call failed. Not retried internally.
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The model provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A client configuration error (missing key, bad endpoint).
    #[error("Model configuration error: {0}")]
    Config(String),
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
