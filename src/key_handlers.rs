use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies one key event to the chat screen.
///
/// Enter submits the input buffer; the trimmed query, if any, is returned for
/// the event loop to dispatch as a request.
pub fn handle_chat_input(key: KeyEvent, app: &mut App) -> Option<String> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            return app.submit_input();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_chars_build_input_buffer() {
        let mut app = App::new();
        handle_chat_input(key(KeyCode::Char('h')), &mut app);
        handle_chat_input(key(KeyCode::Char('i')), &mut app);
        assert_eq!(app.input, "hi");

        handle_chat_input(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.input, "h");
    }

    #[test]
    fn test_enter_dispatches_trimmed_query() {
        let mut app = App::new();
        app.input = " search ".to_string();
        let dispatched = handle_chat_input(key(KeyCode::Enter), &mut app);
        assert_eq!(dispatched, Some("search".to_string()));
    }

    #[test]
    fn test_enter_on_empty_input_dispatches_nothing() {
        let mut app = App::new();
        let dispatched = handle_chat_input(key(KeyCode::Enter), &mut app);
        assert_eq!(dispatched, None);
        assert!(app.conversation.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        handle_chat_input(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.should_quit);
    }
}
