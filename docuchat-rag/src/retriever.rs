//! Question-time retrieval.

use std::sync::Arc;

use tracing::debug;

use crate::document::SearchResult;
use crate::error::Result;
use crate::pipeline::RagPipeline;

/// Retrieves the chunks most relevant to a question.
///
/// A thin pass-through to the pipeline's query path against one fixed
/// collection. There is no re-ranking and no filtering by source — every
/// ingested source is searched together.
pub struct Retriever {
    pipeline: Arc<RagPipeline>,
    collection: String,
}

impl Retriever {
    /// Create a retriever over the given collection.
    pub fn new(pipeline: Arc<RagPipeline>, collection: impl Into<String>) -> Self {
        Self { pipeline, collection: collection.into() }
    }

    /// Return up to `top_k` chunks ranked by similarity to the question.
    ///
    /// `top_k` comes from the pipeline configuration (default 6). Fewer
    /// stored entries yield fewer results; an empty index yields none.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<SearchResult>> {
        debug!(collection = %self.collection, "retrieving context");
        self.pipeline.query(&self.collection, question).await
    }
}
