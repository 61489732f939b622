//! # docuchat-model
//!
//! Generation model clients for the docuchat document chat system.
//!
//! ## Overview
//!
//! Answer generation goes through the [`GenerationModel`] trait: one prompt
//! in, the model's raw text out. No streaming, no retries — a failed call
//! surfaces as [`ModelError`] and the caller decides what to do.
//!
//! - [`OpenAIChatModel`] — OpenAI-compatible chat completions endpoint
//! - [`MockLlm`] — canned responses for tests and offline runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docuchat_model::OpenAIChatModel;
//!
//! let model = OpenAIChatModel::from_env()?;
//! let answer = model.complete("Say hello.").await?;
//! ```

use async_trait::async_trait;

pub mod error;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;

pub use error::{ModelError, Result};
pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::OpenAIChatModel;

/// A text-completion service: one prompt in, the response text out.
///
/// Calls are blocking from the caller's point of view and carry no timeout;
/// implementations surface failures without retrying.
#[async_trait]
pub trait GenerationModel: Send + Sync {
    /// Generate a completion for the given prompt, returned verbatim.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// The model name, for logging.
    fn name(&self) -> &str;
}
