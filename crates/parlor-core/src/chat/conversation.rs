//! Per-character conversation history.

use parlor_types::chat::Message;

/// Ordered messages exchanged with one character.
///
/// Append-only: messages are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Seed an empty conversation with the character's standing question.
    ///
    /// Returns `true` if the seed message was added.
    pub fn seed_if_empty(&mut self, standing_question: &str) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(Message::ai(standing_question));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_types::chat::MessageRole;

    #[test]
    fn test_seed_only_once() {
        let mut conv = Conversation::new();
        assert!(conv.seed_if_empty("How are you?"));
        assert!(!conv.seed_if_empty("How are you?"));
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].role, MessageRole::Ai);
        assert_eq!(conv.messages()[0].text, "How are you?");
    }

    #[test]
    fn test_seed_skipped_when_not_empty() {
        let mut conv = Conversation::new();
        conv.push(Message::user("Hi"));
        assert!(!conv.seed_if_empty("How are you?"));
        assert_eq!(conv.len(), 1);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut conv = Conversation::new();
        conv.push(Message::user("one"));
        conv.push(Message::ai("two"));
        assert_eq!(conv.last().unwrap().text, "two");
        assert_eq!(conv.messages()[0].text, "one");
    }
}
