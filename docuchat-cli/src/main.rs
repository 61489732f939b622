//! docuchat — chat with your PDFs and web pages from the terminal.
//!
//! Wires the persistent index, the embedding and generation services, the
//! ingestion pipeline, and the console loop together. One session, one
//! shared collection, strictly sequential operations.

mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use docuchat_chat::{AnswerComposer, ChatHistory};
use docuchat_ingest::{Indexer, UploadStore};
use docuchat_model::OpenAIChatModel;
use docuchat_rag::{
    DEFAULT_COLLECTION, EmbeddingProvider, FixedSizeChunker, HashEmbedding,
    OpenAIEmbeddingProvider, PersistentVectorStore, RagConfig, RagPipeline, Retriever,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "docuchat", about = "Chat with your PDFs and web pages", version)]
struct Args {
    /// Directory the vector index is persisted under
    #[arg(long, default_value = "./docuchat_index")]
    data_dir: PathBuf,

    /// Directory uploaded PDFs are stored under
    #[arg(long, default_value = "./uploaded_pdfs")]
    uploads_dir: PathBuf,

    /// Maximum chunk size in characters
    #[arg(long, default_value_t = 1000)]
    chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    #[arg(long, default_value_t = 200)]
    chunk_overlap: usize,

    /// Number of chunks retrieved per question
    #[arg(long, default_value_t = 6)]
    top_k: usize,

    /// Chat model name
    #[arg(long, default_value = "gpt-3.5-turbo")]
    chat_model: String,

    /// Embedding model name
    #[arg(long, default_value = "text-embedding-3-small")]
    embedding_model: String,

    /// OpenAI-compatible API base URL (applies to both services)
    #[arg(long)]
    api_base: Option<String>,

    /// Use deterministic hash embeddings instead of the embedding service
    #[arg(long)]
    hash_embeddings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = RagConfig::builder()
        .chunk_size(args.chunk_size)
        .chunk_overlap(args.chunk_overlap)
        .top_k(args.top_k)
        .build()?;

    let embedding_provider: Arc<dyn EmbeddingProvider> = if args.hash_embeddings {
        Arc::new(HashEmbedding::new())
    } else {
        let mut provider =
            OpenAIEmbeddingProvider::from_env()?.with_model(&args.embedding_model);
        if let Some(base) = &args.api_base {
            provider = provider.with_base_url(base);
        }
        Arc::new(provider)
    };

    let store = Arc::new(PersistentVectorStore::new(&args.data_dir)?);

    let pipeline = Arc::new(
        RagPipeline::builder()
            .config(config.clone())
            .embedding_provider(embedding_provider)
            .vector_store(store.clone())
            .chunker(Arc::new(FixedSizeChunker::from_config(&config)))
            .build()?,
    );

    let mut model = OpenAIChatModel::from_env()?.with_model(&args.chat_model);
    if let Some(base) = &args.api_base {
        model = model.with_base_url(base);
    }

    let indexer = Indexer::new(
        pipeline.clone(),
        UploadStore::new(&args.uploads_dir)?,
        DEFAULT_COLLECTION,
    );
    let retriever = Retriever::new(pipeline, DEFAULT_COLLECTION);
    let composer = AnswerComposer::new(Arc::new(model));

    let app = console::App {
        indexer,
        retriever,
        composer,
        store,
        history: ChatHistory::new(),
    };
    console::run(app).await
}
