//! Vector store trait for storing and searching embedded chunks.

use async_trait::async_trait;

use crate::document::{Chunk, IndexEntry, SearchResult};
use crate::error::Result;

/// A storage backend for embedded chunks with similarity search.
///
/// Implementations manage named collections of [`IndexEntry`] rows.
/// Collections are created lazily: adding to or searching a collection that
/// does not exist yet behaves as if it were empty. Entries are append-only —
/// adding the same chunk twice stores two independent rows — and are removed
/// only by [`clear`](VectorStore::clear).
///
/// `clear` racing a concurrent `add` or `search` on the same collection has
/// unspecified results; callers are expected to quiesce first.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Append entries for the given chunks, which must have embeddings set.
    ///
    /// A single call either fully succeeds or leaves the stored state
    /// unmodified.
    async fn add(&self, collection: &str, chunks: &[Chunk]) -> Result<()>;

    /// Search for the `top_k` entries most similar to the given embedding.
    ///
    /// Returns results ordered by descending cosine similarity. A collection
    /// with fewer than `top_k` entries yields all of them; an empty or
    /// missing collection yields an empty `Vec`, never an error.
    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>>;

    /// Destroy the collection and all its entries.
    ///
    /// Subsequent adds and searches start from a fresh empty collection.
    async fn clear(&self, collection: &str) -> Result<()>;

    /// Return the number of entries currently stored in the collection.
    async fn count(&self, collection: &str) -> Result<usize>;
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score every entry against the query embedding and keep the top `top_k`,
/// ordered by descending similarity.
///
/// Shared by the in-memory and persistent backends. The returned chunks do
/// not carry their embeddings back out.
pub(crate) fn rank(entries: &[IndexEntry], embedding: &[f32], top_k: usize) -> Vec<SearchResult> {
    let mut scored: Vec<SearchResult> = entries
        .iter()
        .map(|entry| SearchResult {
            chunk: Chunk {
                id: entry.id.clone(),
                text: entry.text.clone(),
                embedding: Vec::new(),
                metadata: entry.metadata.clone(),
                document_id: entry.document_id.clone(),
            },
            score: cosine_similarity(&entry.embedding, embedding),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);
    scored
}
