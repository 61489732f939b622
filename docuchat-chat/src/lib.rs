//! # docuchat-chat
//!
//! Conversation history and answer composition for the docuchat document
//! chat system.
//!
//! ## Overview
//!
//! A question is answered by rendering the retrieved chunks and the last
//! few turns of conversation into a fixed prompt template and sending it to
//! the generation model:
//!
//! - [`ChatHistory`] — the session's ordered user/assistant turns
//! - [`PromptTemplate`] — named-slot templates with checked substitution
//! - [`AnswerComposer`] — context + history window → prompt → answer
//!
//! ```rust,ignore
//! use docuchat_chat::{AnswerComposer, ChatHistory};
//!
//! let composer = AnswerComposer::new(model);
//! let mut history = ChatHistory::new();
//!
//! let retrieved = retriever.retrieve(question).await?;
//! let answer = composer.answer(question, &retrieved, &history).await?;
//! history.push_exchange(question, &answer);
//! ```

pub mod composer;
pub mod error;
pub mod history;
pub mod prompt;

pub use composer::AnswerComposer;
pub use error::{ChatError, Result};
pub use history::{ChatHistory, ChatRole, ChatTurn, HISTORY_WINDOW};
pub use prompt::{ANSWER_TEMPLATE, PromptTemplate};
