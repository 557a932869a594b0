use crate::constants::{BOT_AVATAR, USER_AVATAR};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One chat message. Immutable after creation; display order is append order.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    content: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Projects the message into a bubble: avatar header, wrapped content,
    /// footer. The content is rendered as literal text, never as markup.
    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style();

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, area, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.sender {
            Sender::User => Color::Rgb(255, 223, 128),
            Sender::Bot => Color::Rgb(144, 238, 144),
        })
    }

    fn avatar(&self) -> &'static str {
        match self.sender {
            Sender::User => USER_AVATAR,
            Sender::Bot => BOT_AVATAR,
        }
    }

    fn indent(&self) -> &'static str {
        if self.sender == Sender::User {
            "  "
        } else {
            ""
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.timestamp.format("%H:%M").to_string();

        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(format!("{} ", self.avatar()), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let indent = self.indent();
        let wrap_width = (area.width as usize).saturating_sub(4).max(1);

        for wrapped_line in wrap(&self.content, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_long_content() {
        let msg = ChatMessage::new("a".repeat(100), Sender::Bot);
        let area = Rect::new(0, 0, 24, 10);
        let lines = msg.render(area);
        // header + at least five wrapped lines + footer
        assert!(lines.len() >= 7);
    }

    #[test]
    fn test_render_keeps_content_literal() {
        let msg = ChatMessage::new("<b>not markup</b>", Sender::User);
        let lines = msg.render(Rect::new(0, 0, 80, 10));
        let joined: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(joined.contains("<b>not markup</b>"));
    }
}
