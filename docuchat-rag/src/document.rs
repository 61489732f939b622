//! Data types for documents, chunks, stored entries, and search results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata key carrying the ingestion source label (URL or filename).
pub const SOURCE_KEY: &str = "source";

/// A source document containing text content and metadata.
///
/// Created by ingestion; immutable once chunked. The metadata carries at
/// minimum a [`SOURCE_KEY`] label naming where the text came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// The text content of the document.
    pub text: String,
    /// Key-value metadata associated with the document.
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Create a document with a freshly generated id and the given source label.
    pub fn from_source(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            metadata: HashMap::from([(SOURCE_KEY.to_string(), source.into())]),
        }
    }
}

/// A segment of a [`Document`], at most `chunk_size` characters long.
///
/// Consecutive chunks of the same document overlap by `chunk_overlap`
/// characters. The embedding is empty until the pipeline attaches one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier for the chunk (`{document_id}_{chunk_index}`).
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text.
    pub embedding: Vec<f32>,
    /// Metadata inherited from the parent document plus a `chunk_index` field.
    pub metadata: HashMap<String, String>,
    /// The ID of the parent [`Document`].
    pub document_id: String,
}

/// A row stored inside a vector store collection.
///
/// Entries are created on add with a freshly generated id, never mutated,
/// and deleted only by clearing the whole collection. Adding the same chunk
/// twice stores two independent entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexEntry {
    /// Store-assigned unique identifier for this entry.
    pub id: String,
    /// The chunk text.
    pub text: String,
    /// The embedding vector the entry is searched by.
    pub embedding: Vec<f32>,
    /// Chunk metadata, including the source label.
    pub metadata: HashMap<String, String>,
    /// The ID of the document the chunk came from.
    pub document_id: String,
}

impl IndexEntry {
    /// Build a stored entry from an embedded chunk, assigning a fresh entry id.
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: chunk.text.clone(),
            embedding: chunk.embedding.clone(),
            metadata: chunk.metadata.clone(),
            document_id: chunk.document_id.clone(),
        }
    }
}

/// A retrieved chunk paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk. Its embedding is not populated on the way out.
    pub chunk: Chunk,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}
