//! Indexer behavior over stubbed fetchers and the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use docuchat_ingest::error::{IngestError, Result};
use docuchat_ingest::fetch::PageFetcher;
use docuchat_ingest::indexer::Indexer;
use docuchat_ingest::upload::UploadStore;
use docuchat_rag::{
    DEFAULT_COLLECTION, EmbeddingProvider, FixedSizeChunker, HashEmbedding, InMemoryVectorStore,
    RagConfig, RagPipeline, VectorStore,
};
use tempfile::TempDir;

struct StubFetcher {
    text: String,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_rendered(&self, _url: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}

struct UnreachableFetcher;

#[async_trait]
impl PageFetcher for UnreachableFetcher {
    async fn fetch_rendered(&self, url: &str) -> Result<String> {
        Err(IngestError::Fetch { url: url.to_string(), message: "connection refused".into() })
    }
}

fn build_pipeline(store: Arc<InMemoryVectorStore>) -> Arc<RagPipeline> {
    let config = RagConfig::default();
    Arc::new(
        RagPipeline::builder()
            .config(config.clone())
            .embedding_provider(Arc::new(HashEmbedding::new()))
            .vector_store(store)
            .chunker(Arc::new(FixedSizeChunker::from_config(&config)))
            .build()
            .unwrap(),
    )
}

fn build_indexer(store: Arc<InMemoryVectorStore>, uploads: &TempDir) -> Indexer {
    Indexer::new(
        build_pipeline(store),
        UploadStore::new(uploads.path()).unwrap(),
        DEFAULT_COLLECTION,
    )
}

#[tokio::test]
async fn url_source_is_chunked_and_labeled() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    let indexer = build_indexer(store.clone(), &uploads).with_fetcher(Arc::new(StubFetcher {
        text: "page text about an interesting subject".to_string(),
    }));

    let report = indexer.index_url("https://example.com/article").await.unwrap();
    assert_eq!(report.source, "https://example.com/article");
    assert_eq!(report.chunks_added, 1);
    assert_eq!(store.count(DEFAULT_COLLECTION).await.unwrap(), 1);

    let query =
        HashEmbedding::new().embed("page text about an interesting subject").await.unwrap();
    let results = store.search(DEFAULT_COLLECTION, &query, 1).await.unwrap();
    assert_eq!(
        results[0].chunk.metadata.get("source").map(String::as_str),
        Some("https://example.com/article")
    );
}

#[tokio::test]
async fn fetch_failure_persists_nothing() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    let indexer = build_indexer(store.clone(), &uploads).with_fetcher(Arc::new(UnreachableFetcher));

    let err = indexer.index_url("https://unreachable.invalid").await.unwrap_err();
    assert!(matches!(err, IngestError::Fetch { .. }));
    assert_eq!(store.count(DEFAULT_COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn uploaded_file_is_saved_then_indexed_under_its_name() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    let indexer = build_indexer(store.clone(), &uploads);

    let report =
        indexer.index_upload("notes.pdf", b"plain text posing as a pdf").await.unwrap();
    assert_eq!(report.source, "notes.pdf");
    assert_eq!(report.chunks_added, 1);
    assert!(uploads.path().join("notes.pdf").exists());

    let query = HashEmbedding::new().embed("plain text posing as a pdf").await.unwrap();
    let results = store.search(DEFAULT_COLLECTION, &query, 1).await.unwrap();
    assert_eq!(results[0].chunk.metadata.get("source").map(String::as_str), Some("notes.pdf"));
}

#[tokio::test]
async fn missing_file_reports_io_error() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    let indexer = build_indexer(store.clone(), &uploads);

    let err = indexer.index_file(std::path::Path::new("/no/such/file.pdf")).await.unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
    assert_eq!(store.count(DEFAULT_COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn empty_page_indexes_zero_chunks() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    let indexer = build_indexer(store.clone(), &uploads)
        .with_fetcher(Arc::new(StubFetcher { text: String::new() }));

    let report = indexer.index_url("https://example.com/empty").await.unwrap();
    assert_eq!(report.chunks_added, 0);
    assert_eq!(store.count(DEFAULT_COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn long_page_reports_every_chunk_added() {
    let store = Arc::new(InMemoryVectorStore::new());
    let uploads = TempDir::new().unwrap();
    // 1200 characters with the default config: exactly two chunks.
    let text = "A".repeat(800) + &"B".repeat(400);
    let indexer =
        build_indexer(store.clone(), &uploads).with_fetcher(Arc::new(StubFetcher { text }));

    let report = indexer.index_url("https://example.com/long").await.unwrap();
    assert_eq!(report.chunks_added, 2);
    assert_eq!(store.count(DEFAULT_COLLECTION).await.unwrap(), 2);
}
