//! Error types for the `docuchat-chat` crate.

use thiserror::Error;

/// Errors that can occur while composing an answer.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A prompt template slot was left unfilled.
    #[error("Template error: {0}")]
    Template(String),

    /// The generation service call failed.
    #[error(transparent)]
    Generation(#[from] docuchat_model::ModelError),
}

/// A convenience result type for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
