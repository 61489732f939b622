//! Web page fetching and text extraction.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, error};

use crate::error::{IngestError, Result};

/// Elements whose text makes up the readable content of a page.
const CONTENT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, td, th, blockquote, pre";

/// Fetches the rendered text content of a web page.
///
/// The seam for page acquisition: the default implementation does a plain
/// HTTP fetch and extracts text from the DOM; a JS-rendering fetcher can be
/// substituted behind the same trait.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its text content.
    async fn fetch_rendered(&self, url: &str) -> Result<String>;
}

/// A [`PageFetcher`] backed by reqwest and DOM text extraction.
#[derive(Debug, Default)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Create a new fetcher with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch_error(url: &str, message: impl Into<String>) -> IngestError {
        IngestError::Fetch { url: url.to_string(), message: message.into() }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_rendered(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(url, error = %e, "page request failed");
            Self::fetch_error(url, format!("request failed: {e}"))
        })?;

        let response = response.error_for_status().map_err(|e| {
            error!(url, error = %e, "page returned error status");
            Self::fetch_error(url, format!("{e}"))
        })?;

        let html = response
            .text()
            .await
            .map_err(|e| Self::fetch_error(url, format!("failed to read body: {e}")))?;

        Ok(html_to_text(&html))
    }
}

/// Extract readable text from an HTML document.
///
/// Collects the text of content elements in document order, one block per
/// line with whitespace collapsed. Pages with none of those elements fall
/// back to all text nodes.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut blocks: Vec<String> = Vec::new();
    if let Ok(selector) = Selector::parse(CONTENT_SELECTOR) {
        for element in document.select(&selector) {
            let joined = element.text().collect::<Vec<_>>().join(" ");
            let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collapsed.is_empty() {
                blocks.push(collapsed);
            }
        }
    }

    if blocks.is_empty() {
        let all = document.root_element().text().collect::<Vec<_>>().join(" ");
        return all.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    blocks.join("\n")
}
