use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::api::{ChatMessage, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
pub const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single chat message with
/// sender-based styling.
///
/// `Message` is a transient component: it's created fresh each frame with
/// the data it needs to render and holds no mutable state.
///
/// The [`calculate_height`](Self::calculate_height) method predicts the
/// rendered height using `textwrap` with options that match Ratatui's
/// `Paragraph` wrapping, so the parent `MessageList` can lay out the
/// scroll view without rendering each message first.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    /// Calculate the height required for this message text at a given width.
    pub fn calculate_height(text: &str, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row
            return 1;
        }

        let content = text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    pub fn role_label(sender: Sender) -> &'static str {
        match sender {
            Sender::User => "you",
            Sender::Bot => "assistant",
        }
    }

    pub fn role_style(sender: Sender) -> Style {
        match sender {
            Sender::User => Style::default().fg(Color::Cyan),
            Sender::Bot => Style::default().fg(Color::Green),
        }
    }
}

// Widget impl so MessageList can render into a ScrollView buffer
impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let role = Self::role_label(self.message.sender);
        let style = Self::role_style(self.message.sender);

        let block = Block::bordered()
            .title(role)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title_style(style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.message.text.trim())
            .style(style)
            .wrap(Wrap { trim: true });
        paragraph.render(inner_area, buf);
    }
}

impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        assert_eq!(Message::calculate_height("", 80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_whitespace_only_treated_as_empty() {
        assert_eq!(Message::calculate_height("   \n\t  ", 80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        assert_eq!(Message::calculate_height("Hello world", 0), 1);
    }

    #[test]
    fn calculate_height_single_line_fits() {
        // "Hello" (5 chars) fits in width 80 - HORIZONTAL_OVERHEAD = 76
        assert_eq!(Message::calculate_height("Hello", 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        // "Hello world" = 11 chars, width 9 → content_width = 5
        // Wraps to: "Hello" | "world" = 2 lines
        assert_eq!(
            Message::calculate_height("Hello world", 9),
            2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_breaks_long_words() {
        // "abcdefghij" = 10 chars, width 8 → content_width = 4
        // Breaks to: "abcd" | "efgh" | "ij" = 3 lines
        assert_eq!(
            Message::calculate_height("abcdefghij", 8),
            3 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn style_user_is_cyan() {
        assert_eq!(Message::role_style(Sender::User).fg, Some(Color::Cyan));
        assert_eq!(Message::role_label(Sender::User), "you");
    }

    #[test]
    fn style_bot_is_green() {
        assert_eq!(Message::role_style(Sender::Bot).fg, Some(Color::Green));
        assert_eq!(Message::role_label(Sender::Bot), "assistant");
    }
}
