use crate::chat_message::ChatMessage;

/// The ordered message log, the single source of truth for the chat view.
///
/// Append-only: messages are never reordered, edited, or removed once pushed.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Sender;

    #[test]
    fn test_push_preserves_order() {
        let mut convo = Conversation::new();
        convo.push(ChatMessage::new("first", Sender::User));
        convo.push(ChatMessage::new("second", Sender::Bot));
        convo.push(ChatMessage::new("third", Sender::User));

        let contents: Vec<&str> = convo.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(Conversation::new().is_empty());
        assert_eq!(Conversation::new().len(), 0);
    }
}
