//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`FixedSizeChunker`], which
//! splits text into overlapping fixed-size windows by character count.

use crate::config::RagConfig;
use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// A strategy for splitting documents into chunks.
///
/// Implementations produce [`Chunk`]s with text and metadata but no
/// embeddings. Embeddings are attached later by the pipeline.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if the document has empty text. Each returned
    /// chunk has an empty embedding vector.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits text into fixed-size chunks by character count with overlap.
///
/// Windows are measured in Unicode scalar values, so a chunk never splits a
/// multi-byte character. Each window after the first begins `chunk_overlap`
/// characters before the end of the previous one, and every character of the
/// input appears in at least one chunk. Input no longer than `chunk_size`
/// yields exactly one chunk equal to the input.
///
/// Chunk IDs are generated as `{document_id}_{chunk_index}`, and each chunk
/// inherits the parent document's metadata plus a `chunk_index` field.
///
/// # Example
///
/// ```rust,ignore
/// use docuchat_rag::FixedSizeChunker;
///
/// let chunker = FixedSizeChunker::new(1000, 200)?;
/// let chunks = chunker.chunk(&document);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_overlap >= chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, chunk_overlap })
    }

    /// Create a chunker from an already-validated [`RagConfig`].
    pub fn from_config(config: &RagConfig) -> Self {
        Self { chunk_size: config.chunk_size, chunk_overlap: config.chunk_overlap }
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        if document.text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every character, so windows slice on char boundaries.
        let offsets: Vec<usize> = document.text.char_indices().map(|(i, _)| i).collect();
        let char_count = offsets.len();
        let byte_at =
            |pos: usize| if pos >= char_count { document.text.len() } else { offsets[pos] };

        // Validated at construction: overlap < size, so the stride is non-zero.
        let stride = self.chunk_size - self.chunk_overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_index = 0;

        loop {
            let end = (start + self.chunk_size).min(char_count);
            let chunk_text = &document.text[byte_at(start)..byte_at(end)];

            let mut metadata = document.metadata.clone();
            metadata.insert("chunk_index".to_string(), chunk_index.to_string());

            chunks.push(Chunk {
                id: format!("{}_{chunk_index}", document.id),
                text: chunk_text.to_string(),
                embedding: Vec::new(),
                metadata,
                document_id: document.id.clone(),
            });

            // A window that reaches the end is the final window.
            if end == char_count {
                break;
            }
            chunk_index += 1;
            start += stride;
        }

        chunks
    }
}
