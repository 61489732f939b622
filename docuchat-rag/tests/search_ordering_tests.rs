//! Property tests for vector store search ordering.

use std::collections::HashMap;

use docuchat_rag::document::Chunk;
use docuchat_rag::inmemory::InMemoryVectorStore;
use docuchat_rag::vectorstore::VectorStore;
use proptest::prelude::*;

const DIM: usize = 16;

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map("non-zero embedding", |mut v| {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm < 1e-8 {
            return None;
        }
        for val in &mut v {
            *val /= norm;
        }
        Some(v)
    })
}

/// Generate a chunk with a normalized embedding.
fn arb_chunk(dim: usize) -> impl Strategy<Value = Chunk> {
    ("[a-z]{3,8}", "[a-z ]{5,30}", arb_normalized_embedding(dim)).prop_map(
        |(id, text, embedding)| Chunk {
            id,
            text,
            embedding,
            metadata: HashMap::new(),
            document_id: "doc_1".to_string(),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any stored chunks, search returns at most `top_k` results ordered
    /// by descending cosine similarity, and never more than were stored.
    #[test]
    fn results_ordered_descending_and_bounded_by_top_k(
        chunks in proptest::collection::vec(arb_chunk(DIM), 1..20),
        query in arb_normalized_embedding(DIM),
        top_k in 1usize..25,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (results, stored) = rt.block_on(async {
            let store = InMemoryVectorStore::new();
            store.add("test", &chunks).await.unwrap();
            let stored = store.count("test").await.unwrap();
            (store.search("test", &query, top_k).await.unwrap(), stored)
        });

        // Every add appends, so the stored count equals the input count.
        prop_assert_eq!(stored, chunks.len());
        prop_assert!(results.len() <= top_k);
        prop_assert!(results.len() <= stored);

        for window in results.windows(2) {
            prop_assert!(
                window[0].score >= window[1].score,
                "results not in descending order: {} < {}",
                window[0].score,
                window[1].score,
            );
        }
    }
}
