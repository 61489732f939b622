//! Conversation history.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many trailing turns of history are rendered into the prompt:
/// the most recent three user/assistant pairs.
pub const HISTORY_WINDOW: usize = 6;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "User"),
            ChatRole::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One turn of conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who spoke.
    pub role: ChatRole,
    /// What was said.
    pub content: String,
}

/// The session's ordered conversation history.
///
/// Turns alternate user/assistant and live for the session only — there is
/// no persistence. A question/answer pair is appended with
/// [`push_exchange`](ChatHistory::push_exchange) after a fully successful
/// answer cycle; a failed answer leaves the history untouched.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn { role: ChatRole::User, content: content.into() });
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn { role: ChatRole::Assistant, content: content.into() });
    }

    /// Append a completed question/answer pair.
    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.push_user(question);
        self.push_assistant(answer);
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The last `n` turns, oldest first.
    pub fn window(&self, n: usize) -> &[ChatTurn] {
        &self.turns[self.turns.len().saturating_sub(n)..]
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of turns recorded.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_only_the_most_recent_turns() {
        let mut history = ChatHistory::new();
        for i in 0..10 {
            history.push_exchange(format!("q{i}"), format!("a{i}"));
        }
        assert_eq!(history.len(), 20);

        let window = history.window(HISTORY_WINDOW);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].content, "q7");
        assert_eq!(window[5].content, "a9");
    }

    #[test]
    fn window_of_short_history_returns_everything() {
        let mut history = ChatHistory::new();
        history.push_exchange("only question", "only answer");
        assert_eq!(history.window(HISTORY_WINDOW).len(), 2);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut history = ChatHistory::new();
        history.push_exchange("q", "a");
        history.clear();
        assert!(history.is_empty());
        assert!(history.window(HISTORY_WINDOW).is_empty());
    }

    #[test]
    fn roles_render_capitalized() {
        assert_eq!(ChatRole::User.to_string(), "User");
        assert_eq!(ChatRole::Assistant.to_string(), "Assistant");
    }
}
