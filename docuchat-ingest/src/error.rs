//! Error types for the `docuchat-ingest` crate.

use thiserror::Error;

/// Errors that can occur while acquiring and indexing documents.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A page could not be fetched or yielded no usable content.
    #[error("Fetch error for '{url}': {message}")]
    Fetch {
        /// The URL that failed.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// A file could not be read or an upload could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A chunking, embedding, or storage failure downstream.
    #[error(transparent)]
    Rag(#[from] docuchat_rag::RagError),
}

/// A convenience result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
