//! Best-effort text extraction from uploaded file bytes.

/// Extracts text from raw file bytes.
///
/// Extraction is lossy by contract: implementations degrade on undecodable
/// input instead of failing, so there is no error to return.
pub trait TextExtractor: Send + Sync {
    /// Decode the bytes into text, best effort.
    fn extract_text(&self, bytes: &[u8]) -> String;
}

/// A [`TextExtractor`] that decodes UTF-8 where possible and otherwise maps
/// each byte to a character (Latin-1), so arbitrary input — including raw
/// PDF bytes — always yields a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct LossyTextExtractor;

impl LossyTextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for LossyTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}
