//! Interactive console loop.
//!
//! One action at a time: index a URL, upload a PDF, ask a question, clear
//! the index, clear the chat. Every action prints a success or failure
//! acknowledgment, and a failed action leaves the index and the history
//! exactly as they were.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use docuchat_chat::{AnswerComposer, ChatHistory};
use docuchat_ingest::Indexer;
use docuchat_rag::{DEFAULT_COLLECTION, PersistentVectorStore, Retriever, VectorStore};

pub struct App {
    pub indexer: Indexer,
    pub retriever: Retriever,
    pub composer: AnswerComposer,
    pub store: Arc<PersistentVectorStore>,
    pub history: ChatHistory,
}

pub async fn run(mut app: App) -> Result<()> {
    println!("docuchat — index URLs and PDFs, then ask questions.");
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "/quit" || line == "/exit" {
            break;
        } else if line == "/help" {
            print_help();
        } else if let Some(url) = line.strip_prefix("/index ") {
            index_url(&app, url.trim()).await;
        } else if let Some(path) = line.strip_prefix("/upload ") {
            upload(&app, path.trim()).await;
        } else if line == "/clear-index" {
            match app.store.clear(DEFAULT_COLLECTION).await {
                Ok(()) => println!("Vector index cleared."),
                Err(e) => println!("Failed to clear index: {e}"),
            }
        } else if line == "/clear-chat" {
            app.history.clear();
            println!("Chat history cleared.");
        } else if line.starts_with('/') {
            println!("Unknown command. Type /help for the list.");
        } else {
            ask(&mut app, line).await;
        }
    }

    Ok(())
}

fn print_help() {
    println!("  /index <url>      index a web page");
    println!("  /upload <path>    store and index a PDF");
    println!("  /clear-index      delete the vector index");
    println!("  /clear-chat       forget the conversation");
    println!("  /quit             exit");
    println!("  anything else is a question.");
}

async fn index_url(app: &App, url: &str) {
    match app.indexer.index_url(url).await {
        Ok(report) => println!("Indexed {} ({} chunks).", report.source, report.chunks_added),
        Err(e) => println!("Indexing failed: {e}"),
    }
}

async fn upload(app: &App, path: &str) {
    let name = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.pdf")
        .to_string();

    let result = match tokio::fs::read(path).await {
        Ok(bytes) => app.indexer.index_upload(&name, &bytes).await,
        Err(e) => {
            println!("Could not read '{path}': {e}");
            return;
        }
    };

    match result {
        Ok(report) => println!("Indexed {} ({} chunks).", report.source, report.chunks_added),
        Err(e) => println!("Indexing failed: {e}"),
    }
}

/// Retrieve, compose, answer — and only then record the exchange.
async fn ask(app: &mut App, question: &str) {
    let retrieved = match app.retriever.retrieve(question).await {
        Ok(retrieved) => retrieved,
        Err(e) => {
            println!("Retrieval failed: {e}");
            return;
        }
    };

    match app.composer.answer(question, &retrieved, &app.history).await {
        Ok(answer) => {
            println!("{answer}");
            app.history.push_exchange(question, &answer);
        }
        Err(e) => println!("Failed to answer: {e}"),
    }
}
