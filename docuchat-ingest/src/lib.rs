//! # docuchat-ingest
//!
//! Document acquisition and indexing for the docuchat document chat system.
//!
//! ## Overview
//!
//! Two kinds of source feed the index: web pages and uploaded files
//! (typically PDFs). Acquisition sits behind two seams — [`PageFetcher`]
//! for pages and [`TextExtractor`] for file bytes — and the [`Indexer`]
//! drives acquisition → chunking → source labeling → storage through the
//! retrieval pipeline.
//!
//! ```rust,ignore
//! use docuchat_ingest::{Indexer, UploadStore};
//!
//! let indexer = Indexer::new(pipeline, UploadStore::new("./uploaded_pdfs")?, "everything");
//! let report = indexer.index_url("https://example.com/article").await?;
//! println!("{} chunks from {}", report.chunks_added, report.source);
//! ```

pub mod error;
pub mod extract;
pub mod fetch;
pub mod indexer;
pub mod upload;

pub use error::{IngestError, Result};
pub use extract::{LossyTextExtractor, TextExtractor};
pub use fetch::{HttpPageFetcher, PageFetcher, html_to_text};
pub use indexer::{IndexReport, Indexer};
pub use upload::UploadStore;
