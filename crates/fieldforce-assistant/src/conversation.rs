//! Append-only message history for one chat surface.

use fieldforce_core::models::conversation::{Author, ConversationMessage};

use crate::error::AssistantError;

/// Reject empty and whitespace-only input.
///
/// Returns the input unchanged; the history keeps what the user typed.
pub fn validate_input(input: &str) -> Result<&str, AssistantError> {
    if input.trim().is_empty() {
        return Err(AssistantError::BlankInput);
    }
    Ok(input)
}

/// Ordered message history. Messages can be appended but never edited or
/// removed.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ConversationMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, author: Author, content: impl Into<String>) -> &ConversationMessage {
        self.messages.push(ConversationMessage::new(author, content));
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ConversationMessage {
        self.push(Author::User, content)
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ConversationMessage {
        self.push(Author::Assistant, content)
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
