//! Durable vector store backed by JSON collection files.
//!
//! [`PersistentVectorStore`] keeps one file per collection under a data
//! directory and mirrors loaded collections in memory. Every add rewrites
//! the collection file through a temp-file rename, so a failed write leaves
//! the previous on-disk state intact.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{Chunk, IndexEntry, SearchResult};
use crate::error::{RagError, Result};
use crate::vectorstore::{VectorStore, rank};

/// On-disk shape of one collection. No schema versioning.
#[derive(Debug, Serialize, Deserialize, Default)]
struct CollectionFile {
    entries: Vec<IndexEntry>,
}

/// A [`VectorStore`] persisted to local disk.
///
/// Collections load lazily on first access and stay cached behind a
/// `tokio::sync::RwLock`; the process shares one handle via
/// `Arc<PersistentVectorStore>`. [`clear`](VectorStore::clear) removes the
/// collection file and the cached state in place, so later operations
/// reinitialize a fresh empty collection through the same handle.
///
/// # Example
///
/// ```rust,ignore
/// use docuchat_rag::{PersistentVectorStore, VectorStore};
///
/// let store = PersistentVectorStore::new("./docuchat_index")?;
/// store.add("everything", &chunks).await?;
/// let results = store.search("everything", &query_embedding, 6).await?;
/// ```
#[derive(Debug)]
pub struct PersistentVectorStore {
    data_dir: PathBuf,
    collections: RwLock<HashMap<String, Vec<IndexEntry>>>,
}

impl PersistentVectorStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::StoreUnavailable`] if the directory cannot be
    /// created or accessed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| RagError::StoreUnavailable {
            path: data_dir.display().to_string(),
            message: format!("failed to create data directory: {e}"),
        })?;
        Ok(Self { data_dir, collections: RwLock::new(HashMap::new()) })
    }

    /// The directory collection files live under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    fn unavailable(&self, path: &Path, message: impl Into<String>) -> RagError {
        RagError::StoreUnavailable { path: path.display().to_string(), message: message.into() }
    }

    /// Read a collection file from disk. A missing file is an empty collection.
    async fn read_collection(&self, collection: &str) -> Result<Vec<IndexEntry>> {
        let path = self.collection_path(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(&path, format!("failed to read: {e}"))),
        };
        let file: CollectionFile = serde_json::from_slice(&bytes)
            .map_err(|e| self.unavailable(&path, format!("corrupt collection file: {e}")))?;
        Ok(file.entries)
    }

    /// Serialize and atomically replace the collection file.
    async fn write_collection(&self, collection: &str, entries: &[IndexEntry]) -> Result<()> {
        let path = self.collection_path(collection);
        let json = serde_json::to_vec(&CollectionFile { entries: entries.to_vec() })
            .map_err(|e| self.unavailable(&path, format!("failed to serialize: {e}")))?;

        let tmp = self.data_dir.join(format!("{collection}.json.tmp"));
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| self.unavailable(&tmp, format!("failed to write: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| self.unavailable(&path, format!("failed to replace: {e}")))?;
        Ok(())
    }

    /// Load the collection into the cache if it is not there yet.
    async fn ensure_loaded(&self, collection: &str) -> Result<()> {
        {
            let cache = self.collections.read().await;
            if cache.contains_key(collection) {
                return Ok(());
            }
        }
        let entries = self.read_collection(collection).await?;
        let mut cache = self.collections.write().await;
        let count = entries.len();
        cache.entry(collection.to_string()).or_insert(entries);
        debug!(collection, count, "loaded collection from disk");
        Ok(())
    }
}

#[async_trait]
impl VectorStore for PersistentVectorStore {
    async fn add(&self, collection: &str, chunks: &[Chunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }
        self.ensure_loaded(collection).await?;

        let mut cache = self.collections.write().await;
        let entries = cache.entry(collection.to_string()).or_default();

        // Persist first, then commit to the cache, so a failed write leaves
        // both the file and the in-process state untouched.
        let mut next = entries.clone();
        next.extend(chunks.iter().map(IndexEntry::from_chunk));
        self.write_collection(collection, &next).await?;
        *entries = next;

        debug!(collection, added = chunks.len(), total = entries.len(), "added entries");
        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        self.ensure_loaded(collection).await?;
        let cache = self.collections.read().await;
        let Some(entries) = cache.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(rank(entries, embedding, top_k))
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        let mut cache = self.collections.write().await;
        cache.remove(collection);

        let path = self.collection_path(collection);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(self.unavailable(&path, format!("failed to delete: {e}"))),
        }

        info!(collection, "cleared collection");
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        self.ensure_loaded(collection).await?;
        let cache = self.collections.read().await;
        Ok(cache.get(collection).map_or(0, Vec::len))
    }
}
