//! # InputBox Component
//!
//! Single-line draft editor for the message being composed.
//!
//! Owns the draft text (internal state). Handles editing (insert, delete,
//! cursor movement, paste) and submission. Enter with a non-blank buffer
//! emits `InputEvent::Submit` and clears the draft immediately; Enter on
//! an empty or whitespace-only buffer does nothing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the draft (Enter pressed with non-blank text)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Draft text being composed
    pub buffer: String,
    /// Cursor position as a byte offset into `buffer`
    cursor_pos: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor_pos: 0,
        }
    }

    /// Replaces the draft, placing the cursor at the end. Used to hand a
    /// rejected submit back to the user instead of dropping their text.
    pub fn set_text(&mut self, text: String) {
        self.cursor_pos = text.len();
        self.buffer = text;
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| self.cursor_pos + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// First visible byte offset so the cursor stays inside `inner_width`
    /// columns. Scrolls horizontally for drafts longer than the box.
    fn scroll_start(&self, inner_width: usize) -> usize {
        if inner_width == 0 {
            return self.cursor_pos;
        }
        let mut width = self.buffer[..self.cursor_pos].width();
        let mut start = 0;
        let mut chars = self.buffer[..self.cursor_pos].char_indices();
        while width >= inner_width {
            match chars.next() {
                Some((i, c)) => {
                    width -= c.width().unwrap_or(0);
                    start = i + c.len_utf8();
                }
                None => break,
            }
        }
        start
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let start = self.scroll_start(inner_width);
        let visible = &self.buffer[start..];

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Message");

        let input = Paragraph::new(visible)
            .block(block)
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::White));

        frame.render_widget(input, area);

        let cursor_x = self.buffer[start..self.cursor_pos].width() as u16;
        frame.set_cursor_position((area.x + 1 + cursor_x, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line box: collapse pasted line breaks to spaces
                let flattened = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor_pos, &flattened);
                self.cursor_pos += flattened.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = self.next_char_boundary();
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = self.prev_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = self.next_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor_pos = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
