//! Behavior tests for the disk-backed vector store.

use std::collections::HashMap;

use docuchat_rag::document::Chunk;
use docuchat_rag::embedding::EmbeddingProvider;
use docuchat_rag::error::RagError;
use docuchat_rag::hash::HashEmbedding;
use docuchat_rag::persist::PersistentVectorStore;
use docuchat_rag::vectorstore::VectorStore;
use tempfile::TempDir;

const COLLECTION: &str = "everything";

async fn embedded_chunk(id: &str, text: &str) -> Chunk {
    let embedding = HashEmbedding::new().embed(text).await.unwrap();
    Chunk {
        id: id.to_string(),
        text: text.to_string(),
        embedding,
        metadata: HashMap::from([("source".to_string(), "test".to_string())]),
        document_id: "doc_1".to_string(),
    }
}

#[tokio::test]
async fn search_on_empty_store_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    let query = HashEmbedding::new().embed("anything").await.unwrap();
    let results = store.search(COLLECTION, &query, 6).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(store.count(COLLECTION).await.unwrap(), 0);
}

#[tokio::test]
async fn added_chunk_is_retrieved_by_its_own_text() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    let chunks = vec![
        embedded_chunk("c0", "the mitochondria is the powerhouse of the cell").await,
        embedded_chunk("c1", "rust ownership prevents data races at compile time").await,
    ];
    store.add(COLLECTION, &chunks).await.unwrap();

    let query = HashEmbedding::new()
        .embed("the mitochondria is the powerhouse of the cell")
        .await
        .unwrap();
    let results = store.search(COLLECTION, &query, 1).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].chunk.text, chunks[0].text);
    assert!((results[0].score - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn fewer_entries_than_k_returns_all_of_them() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    let chunks =
        vec![embedded_chunk("c0", "alpha beta").await, embedded_chunk("c1", "gamma delta").await];
    store.add(COLLECTION, &chunks).await.unwrap();

    let query = HashEmbedding::new().embed("alpha").await.unwrap();
    let results = store.search(COLLECTION, &query, 6).await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn re_adding_identical_content_duplicates_entries() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    let chunk = embedded_chunk("c0", "the same content twice").await;
    store.add(COLLECTION, std::slice::from_ref(&chunk)).await.unwrap();
    store.add(COLLECTION, std::slice::from_ref(&chunk)).await.unwrap();

    assert_eq!(store.count(COLLECTION).await.unwrap(), 2);

    let query = HashEmbedding::new().embed("the same content twice").await.unwrap();
    let results = store.search(COLLECTION, &query, 10).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].chunk.text, results[1].chunk.text);
    // Each stored entry got its own id.
    assert_ne!(results[0].chunk.id, results[1].chunk.id);
}

#[tokio::test]
async fn clear_destroys_collection_and_its_file() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    let chunk = embedded_chunk("c0", "soon to be gone").await;
    store.add(COLLECTION, &[chunk]).await.unwrap();
    let file = dir.path().join(format!("{COLLECTION}.json"));
    assert!(file.exists());

    store.clear(COLLECTION).await.unwrap();
    assert!(!file.exists());
    assert_eq!(store.count(COLLECTION).await.unwrap(), 0);

    let query = HashEmbedding::new().embed("soon to be gone").await.unwrap();
    assert!(store.search(COLLECTION, &query, 6).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_after_clear_starts_a_fresh_collection() {
    let dir = TempDir::new().unwrap();
    let store = PersistentVectorStore::new(dir.path()).unwrap();

    store.add(COLLECTION, &[embedded_chunk("c0", "first generation").await]).await.unwrap();
    store.clear(COLLECTION).await.unwrap();
    store.add(COLLECTION, &[embedded_chunk("c1", "second generation").await]).await.unwrap();

    assert_eq!(store.count(COLLECTION).await.unwrap(), 1);
    let query = HashEmbedding::new().embed("second generation").await.unwrap();
    let results = store.search(COLLECTION, &query, 6).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].chunk.text, "second generation");
}

#[tokio::test]
async fn entries_survive_handle_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = PersistentVectorStore::new(dir.path()).unwrap();
        store.add(COLLECTION, &[embedded_chunk("c0", "durable content").await]).await.unwrap();
    }

    let reopened = PersistentVectorStore::new(dir.path()).unwrap();
    assert_eq!(reopened.count(COLLECTION).await.unwrap(), 1);

    let query = HashEmbedding::new().embed("durable content").await.unwrap();
    let results = reopened.search(COLLECTION, &query, 1).await.unwrap();
    assert_eq!(results[0].chunk.text, "durable content");
}

#[tokio::test]
async fn corrupt_collection_file_reports_store_unavailable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{COLLECTION}.json")), b"not json").unwrap();

    let store = PersistentVectorStore::new(dir.path()).unwrap();
    let query = HashEmbedding::new().embed("anything").await.unwrap();
    let err = store.search(COLLECTION, &query, 6).await.unwrap_err();
    assert!(matches!(err, RagError::StoreUnavailable { .. }));
}
