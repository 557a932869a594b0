use crate::api::ChatOutcome;
use crate::chat_message::{ChatMessage, Sender};
use crate::constants::{ERROR_MESSAGE, NO_RESULT_MESSAGE};
use crate::conversation::Conversation;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;

/// Chat screen state. All mutation happens on the UI loop task; spawned
/// request tasks only report back over a channel.
pub struct App {
    pub input: String,
    pub conversation: Conversation,
    pub status_indicator: StatusIndicator,
    pub logs: LogView,
    pub chat_scroll: u16,
    pub logs_scroll: u16,
    pub should_quit: bool,
    pending_requests: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            conversation: Conversation::new(),
            status_indicator: StatusIndicator::new(),
            logs: LogView::new(),
            chat_scroll: 0,
            logs_scroll: 0,
            should_quit: false,
            pending_requests: 0,
        }
    }

    /// Handles a submission of the current input buffer.
    ///
    /// Whitespace-only input is a silent no-op. Otherwise the trimmed text is
    /// appended as a user message, the buffer is cleared, the loader is shown,
    /// and the text is returned for the event loop to dispatch.
    pub fn submit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }

        self.conversation
            .push(ChatMessage::new(trimmed.clone(), Sender::User));
        self.input.clear();
        self.pending_requests += 1;
        self.status_indicator.set_loading(true);
        self.scroll_to_bottom();
        self.logs.add(format!("Sent query: \"{}\"", trimmed));

        Some(trimmed)
    }

    /// Applies the resolution of one round trip: appends the bot message for
    /// the outcome, then hides the loader once no request remains in flight.
    ///
    /// Replies from overlapping submissions land here in resolution order.
    pub fn resolve_reply(&mut self, outcome: ChatOutcome) {
        let reply = match outcome {
            ChatOutcome::Answer(text) => {
                self.logs.add("Answer received".to_string());
                text
            }
            ChatOutcome::NoResult => {
                self.logs.add("No relevant result".to_string());
                NO_RESULT_MESSAGE.to_string()
            }
            ChatOutcome::Failed => {
                self.logs.add("Request failed".to_string());
                ERROR_MESSAGE.to_string()
            }
        };

        self.conversation.push(ChatMessage::new(reply, Sender::Bot));
        self.scroll_to_bottom();

        self.pending_requests = self.pending_requests.saturating_sub(1);
        if self.pending_requests == 0 {
            self.status_indicator.set_loading(false);
        }
    }

    pub fn pending_requests(&self) -> usize {
        self.pending_requests
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// Pins the view to the newest message. The draw pass clamps the offset
    /// to the actual line count.
    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut app = App::new();
        app.input = "   \t  ".to_string();

        assert_eq!(app.submit_input(), None);
        assert!(app.conversation.is_empty());
        assert_eq!(app.pending_requests(), 0);
        assert!(!app.status_indicator.is_loading());
    }

    #[test]
    fn test_submit_appends_user_message_and_shows_loader() {
        let mut app = App::new();
        app.input = "  what does search do  ".to_string();

        let dispatched = app.submit_input();

        assert_eq!(dispatched, Some("what does search do".to_string()));
        assert!(app.input.is_empty());
        assert_eq!(app.conversation.len(), 1);
        assert_eq!(app.conversation.messages()[0].content(), "what does search do");
        assert_eq!(app.conversation.messages()[0].sender(), Sender::User);
        assert!(app.status_indicator.is_loading());
    }

    #[test]
    fn test_resolve_answer_appends_bot_message_and_hides_loader() {
        let mut app = App::new();
        app.input = "q".to_string();
        app.submit_input();

        app.resolve_reply(ChatOutcome::Answer("Feature X does Y".to_string()));

        assert_eq!(app.conversation.len(), 2);
        let bot = &app.conversation.messages()[1];
        assert_eq!(bot.content(), "Feature X does Y");
        assert_eq!(bot.sender(), Sender::Bot);
        assert!(!app.status_indicator.is_loading());
    }

    #[test]
    fn test_resolve_no_result_uses_fallback_text() {
        let mut app = App::new();
        app.input = "q".to_string();
        app.submit_input();

        app.resolve_reply(ChatOutcome::NoResult);

        assert_eq!(app.conversation.messages()[1].content(), NO_RESULT_MESSAGE);
    }

    #[test]
    fn test_resolve_failure_uses_error_text() {
        let mut app = App::new();
        app.input = "q".to_string();
        app.submit_input();

        app.resolve_reply(ChatOutcome::Failed);

        assert_eq!(app.conversation.messages()[1].content(), ERROR_MESSAGE);
    }

    #[test]
    fn test_loader_stays_on_until_last_overlapping_reply() {
        let mut app = App::new();
        app.input = "first".to_string();
        app.submit_input();
        app.input = "second".to_string();
        app.submit_input();

        assert_eq!(app.pending_requests(), 2);

        // Replies land in resolution order, not submission order.
        app.resolve_reply(ChatOutcome::Answer("second answer".to_string()));
        assert!(app.status_indicator.is_loading());

        app.resolve_reply(ChatOutcome::Answer("first answer".to_string()));
        assert!(!app.status_indicator.is_loading());

        let contents: Vec<&str> = app
            .conversation
            .messages()
            .iter()
            .map(|m| m.content())
            .collect();
        assert_eq!(
            contents,
            vec!["first", "second", "second answer", "first answer"]
        );
    }
}
