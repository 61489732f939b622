//! Prompt templates with named slots.

use crate::error::{ChatError, Result};

/// The prompt used to answer a question from retrieved context and history.
pub const ANSWER_TEMPLATE: &str = "You are a helpful assistant. Use the following context to answer the question.
Chat History:
{history}

Context:
{context}

Question: {question}
Answer:";

/// A text template with `{name}` slots.
///
/// Slots are discovered at construction and every one of them must be given
/// a value at render time — substitution is a checked operation, not ad-hoc
/// string interpolation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    slots: Vec<String>,
}

impl PromptTemplate {
    /// Parse a template, recording its named slots.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let slots = parse_slots(&template);
        Self { template, slots }
    }

    /// The template for answer generation, with `history`, `context`, and
    /// `question` slots.
    pub fn answer() -> Self {
        Self::new(ANSWER_TEMPLATE)
    }

    /// The slot names this template requires.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Fill every slot and return the resulting text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Template`] if any slot has no matching value.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String> {
        let mut out = self.template.clone();
        for slot in &self.slots {
            let value = values
                .iter()
                .find(|(name, _)| name == slot)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    ChatError::Template(format!("missing value for slot '{slot}'"))
                })?;
            out = out.replace(&format!("{{{slot}}}"), value);
        }
        Ok(out)
    }
}

/// Collect the distinct `{name}` slots in order of first appearance.
fn parse_slots(template: &str) -> Vec<String> {
    let mut slots: Vec<String> = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                    && !slots.iter().any(|s| s == name)
                {
                    slots.push(name.to_string());
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_slots_in_order() {
        let template = PromptTemplate::new("a {first} b {second} c {first}");
        assert_eq!(template.slots(), ["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn renders_all_slots() {
        let template = PromptTemplate::new("Q: {question} A: {answer}");
        let text = template.render(&[("question", "why?"), ("answer", "because")]).unwrap();
        assert_eq!(text, "Q: why? A: because");
    }

    #[test]
    fn missing_slot_value_is_an_error() {
        let template = PromptTemplate::new("{history} {question}");
        let err = template.render(&[("history", "")]).unwrap_err();
        assert!(matches!(err, ChatError::Template(_)));
    }

    #[test]
    fn answer_template_requires_the_three_known_slots() {
        let template = PromptTemplate::answer();
        assert_eq!(
            template.slots(),
            ["history".to_string(), "context".to_string(), "question".to_string()]
        );
    }

    #[test]
    fn text_without_slots_renders_verbatim() {
        let template = PromptTemplate::new("no slots here");
        assert_eq!(template.render(&[]).unwrap(), "no slots here");
    }
}
