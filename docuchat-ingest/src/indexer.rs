//! The indexing pipeline: source acquisition → chunking → labeling → storage.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use docuchat_rag::{Document, RagPipeline};
use tracing::info;

use crate::error::Result;
use crate::extract::{LossyTextExtractor, TextExtractor};
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::upload::UploadStore;

/// Outcome of indexing one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// The source label stored on every chunk (URL or filename).
    pub source: String,
    /// How many chunks were added to the collection.
    pub chunks_added: usize,
}

/// Orchestrates ingestion of URLs and files into the shared collection.
///
/// Each source becomes one [`Document`] labeled with its origin, which the
/// pipeline chunks, embeds, and stores in a single add. A failure anywhere
/// upstream of storage leaves the collection unmodified — no partial chunks
/// are persisted and nothing is retried.
pub struct Indexer {
    pipeline: Arc<RagPipeline>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn TextExtractor>,
    uploads: UploadStore,
    collection: String,
}

impl Indexer {
    /// Create an indexer with the default HTTP fetcher and lossy extractor,
    /// writing into the given collection.
    pub fn new(
        pipeline: Arc<RagPipeline>,
        uploads: UploadStore,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            pipeline,
            fetcher: Arc::new(HttpPageFetcher::new()),
            extractor: Arc::new(LossyTextExtractor::new()),
            uploads,
            collection: collection.into(),
        }
    }

    /// Substitute the page fetcher.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Substitute the file text extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fetch a web page and index its text, labeled with the URL.
    pub async fn index_url(&self, url: &str) -> Result<IndexReport> {
        let text = self.fetcher.fetch_rendered(url).await?;
        self.ingest(Document::from_source(text, url), url).await
    }

    /// Read a file, extract its text best-effort, and index it, labeled
    /// with the file name.
    pub async fn index_file(&self, path: &Path) -> Result<IndexReport> {
        let bytes = tokio::fs::read(path).await?;
        let name = path.file_name().and_then(OsStr::to_str).unwrap_or("upload").to_string();
        let text = self.extractor.extract_text(&bytes);
        self.ingest(Document::from_source(text, &name), &name).await
    }

    /// Persist uploaded bytes to the uploads directory, then index the file.
    pub async fn index_upload(&self, name: &str, bytes: &[u8]) -> Result<IndexReport> {
        let path = self.uploads.save(name, bytes).await?;
        self.index_file(&path).await
    }

    async fn ingest(&self, document: Document, source: &str) -> Result<IndexReport> {
        let chunks = self.pipeline.ingest(&self.collection, &document).await?;
        info!(source, chunks_added = chunks.len(), "indexed source");
        Ok(IndexReport { source: source.to_string(), chunks_added: chunks.len() })
    }
}
