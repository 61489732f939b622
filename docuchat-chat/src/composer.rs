//! Answer composition: retrieved context + bounded history → prompt → model.

use std::sync::Arc;

use docuchat_model::GenerationModel;
use docuchat_rag::SearchResult;
use tracing::{debug, info};

use crate::error::Result;
use crate::history::{ChatHistory, HISTORY_WINDOW};
use crate::prompt::PromptTemplate;

/// Builds the answer prompt and invokes the generation service.
///
/// Context is the retrieved chunk texts joined in rank order with a blank
/// line between them — overlapping chunks may repeat text verbatim, and no
/// deduplication is applied. History contributes its last
/// [`HISTORY_WINDOW`] turns, each rendered `"<Role>: <content>"`. The
/// model's response comes back verbatim.
///
/// The composer never touches the history: callers append the exchange only
/// after a successful answer, so a failed generation leaves the
/// conversation exactly as it was.
pub struct AnswerComposer {
    model: Arc<dyn GenerationModel>,
    template: PromptTemplate,
}

impl AnswerComposer {
    /// Create a composer using the default answer template.
    pub fn new(model: Arc<dyn GenerationModel>) -> Self {
        Self { model, template: PromptTemplate::answer() }
    }

    /// Substitute a custom template. It must carry `history`, `context`,
    /// and `question` slots to receive all three values.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Answer the question from the retrieved chunks and the history window.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Generation`](crate::ChatError::Generation) if
    /// the model call fails and
    /// [`ChatError::Template`](crate::ChatError::Template) if the template
    /// is missing a slot value. Neither mutates any state.
    pub async fn answer(
        &self,
        question: &str,
        retrieved: &[SearchResult],
        history: &ChatHistory,
    ) -> Result<String> {
        let context = render_context(retrieved);
        let history_text = render_history(history);

        let prompt = self.template.render(&[
            ("history", history_text.as_str()),
            ("context", context.as_str()),
            ("question", question),
        ])?;

        debug!(
            model = self.model.name(),
            context_chunks = retrieved.len(),
            history_turns = history.window(HISTORY_WINDOW).len(),
            prompt_len = prompt.len(),
            "composed answer prompt"
        );

        let answer = self.model.complete(&prompt).await?;
        info!(model = self.model.name(), answer_len = answer.len(), "generated answer");
        Ok(answer)
    }
}

/// Join chunk texts in retrieval rank order, blank-line separated.
fn render_context(retrieved: &[SearchResult]) -> String {
    retrieved.iter().map(|r| r.chunk.text.as_str()).collect::<Vec<_>>().join("\n\n")
}

/// Render the trailing history window, one `Role: content` line per turn.
fn render_history(history: &ChatHistory) -> String {
    history
        .window(HISTORY_WINDOW)
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use docuchat_rag::Chunk;

    fn result(text: &str, score: f32) -> SearchResult {
        SearchResult {
            chunk: Chunk {
                id: "c".into(),
                text: text.into(),
                embedding: Vec::new(),
                metadata: HashMap::new(),
                document_id: "d".into(),
            },
            score,
        }
    }

    #[test]
    fn context_joins_chunks_in_rank_order_without_dedup() {
        let retrieved =
            vec![result("first", 0.9), result("second", 0.8), result("first", 0.7)];
        assert_eq!(render_context(&retrieved), "first\n\nsecond\n\nfirst");
    }

    #[test]
    fn history_renders_capitalized_roles_in_order() {
        let mut history = ChatHistory::new();
        history.push_exchange("hello", "hi there");
        assert_eq!(render_history(&history), "User: hello\nAssistant: hi there");
    }

    #[test]
    fn history_render_is_bounded_by_the_window() {
        let mut history = ChatHistory::new();
        for i in 0..10 {
            history.push_exchange(format!("q{i}"), format!("a{i}"));
        }
        let rendered = render_history(&history);
        assert_eq!(rendered.lines().count(), HISTORY_WINDOW);
        assert!(rendered.starts_with("User: q7"));
        assert!(rendered.ends_with("Assistant: a9"));
    }
}
