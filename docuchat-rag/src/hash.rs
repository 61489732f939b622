//! Deterministic feature-hash embeddings.
//!
//! [`HashEmbedding`] turns text into a fixed-dimension vector from word and
//! bigram hashes, with no model or network involved. Identical text always
//! produces an identical vector, which makes it suitable for tests and for
//! running the system without an embedding service.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::Result;

/// Default dimensionality for hash embeddings.
const DEFAULT_DIMENSIONS: usize = 384;

/// An [`EmbeddingProvider`] that hashes words and bigrams into a normalized
/// feature vector.
///
/// Retrieval quality is lexical rather than semantic: texts sharing words
/// score close together. The vectors are L2-normalized, so cosine similarity
/// of a text with itself is 1.0.
#[derive(Debug, Clone)]
pub struct HashEmbedding {
    dimensions: usize,
}

impl Default for HashEmbedding {
    fn default() -> Self {
        Self { dimensions: DEFAULT_DIMENSIONS }
    }
}

impl HashEmbedding {
    /// Create a provider with the default dimensionality (384).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a custom dimensionality.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, token: &str, rotation: u32) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish().rotate_right(rotation * 16) % self.dimensions as u64) as usize
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let normalized = text.to_lowercase();
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let mut embedding = vec![0.0f32; self.dimensions];

        for (pos, word) in words.iter().enumerate() {
            // Earlier words weigh more, spread over three buckets per word.
            let weight = 1.0 / (pos as f32 + 1.0);
            embedding[self.bucket(word, 0)] += weight;
            embedding[self.bucket(word, 1)] += weight * 0.7;
            embedding[self.bucket(word, 2)] += weight * 0.5;
        }

        for pair in words.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            embedding[self.bucket(&bigram, 0)] += 0.8;
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut embedding {
                *value /= norm;
            }
        }

        embedding
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
