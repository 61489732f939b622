//! Mock generation model for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::GenerationModel;

/// A [`GenerationModel`] that replays canned responses.
///
/// Responses are handed out in order; once exhausted, the last one repeats.
/// [`MockLlm::failing`] builds a mock whose every call fails, for exercising
/// error paths.
pub struct MockLlm {
    responses: Vec<String>,
    next: Mutex<usize>,
    fail: bool,
}

impl MockLlm {
    /// Create a mock that always answers with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self { responses: vec![response.into()], next: Mutex::new(0), fail: false }
    }

    /// Create a mock that replays `responses` in order.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self { responses, next: Mutex::new(0), fail: false }
    }

    /// Create a mock whose every call returns a generation error.
    pub fn failing() -> Self {
        Self { responses: Vec::new(), next: Mutex::new(0), fail: true }
    }
}

#[async_trait]
impl GenerationModel for MockLlm {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        if self.fail || self.responses.is_empty() {
            return Err(ModelError::Generation {
                provider: "mock".into(),
                message: "mock generation failure".into(),
            });
        }
        let mut next = self.next.lock().unwrap();
        let index = (*next).min(self.responses.len() - 1);
        *next += 1;
        Ok(self.responses[index].clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
