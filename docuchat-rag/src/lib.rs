//! # docuchat-rag
//!
//! Chunking, embedding, and vector retrieval for the docuchat document chat
//! system.
//!
//! ## Overview
//!
//! Documents are split into overlapping fixed-size chunks, embedded, and
//! appended to a durable similarity-searchable collection. At question time
//! the same collection is searched for the top-k most similar chunks.
//!
//! - [`FixedSizeChunker`] — character-window chunking with overlap
//! - [`EmbeddingProvider`] — embedding service seam
//!   ([`OpenAIEmbeddingProvider`], deterministic [`HashEmbedding`])
//! - [`VectorStore`] — storage seam ([`PersistentVectorStore`] on disk,
//!   [`InMemoryVectorStore`] for tests)
//! - [`RagPipeline`] — chunk → embed → add, and embed → search
//! - [`Retriever`] — question-time top-k lookup over the shared collection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docuchat_rag::{
//!     DEFAULT_COLLECTION, FixedSizeChunker, HashEmbedding, PersistentVectorStore,
//!     RagConfig, RagPipeline, Retriever,
//! };
//!
//! let config = RagConfig::default();
//! let pipeline = Arc::new(
//!     RagPipeline::builder()
//!         .config(config.clone())
//!         .embedding_provider(Arc::new(HashEmbedding::new()))
//!         .vector_store(Arc::new(PersistentVectorStore::new("./docuchat_index")?))
//!         .chunker(Arc::new(FixedSizeChunker::from_config(&config)))
//!         .build()?,
//! );
//!
//! pipeline.ingest(DEFAULT_COLLECTION, &document).await?;
//! let retriever = Retriever::new(pipeline, DEFAULT_COLLECTION);
//! let results = retriever.retrieve("what does the document say?").await?;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod hash;
pub mod inmemory;
#[cfg(feature = "openai")]
pub mod openai;
pub mod persist;
pub mod pipeline;
pub mod retriever;
pub mod vectorstore;

pub use chunking::{Chunker, FixedSizeChunker};
pub use config::{DEFAULT_COLLECTION, RagConfig, RagConfigBuilder};
pub use document::{Chunk, Document, IndexEntry, SOURCE_KEY, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use hash::HashEmbedding;
pub use inmemory::InMemoryVectorStore;
#[cfg(feature = "openai")]
pub use openai::OpenAIEmbeddingProvider;
pub use persist::PersistentVectorStore;
pub use pipeline::{RagPipeline, RagPipelineBuilder};
pub use retriever::Retriever;
pub use vectorstore::{VectorStore, cosine_similarity};
