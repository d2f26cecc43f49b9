//! # MessageList Component
//!
//! Scrollable view of the conversation history.
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&mut MessageListState` (persistent scroll state) plus the conversation
//! as props. Heights are predicted with `Message::calculate_height` so the
//! scroll view can be laid out without rendering twice.
//!
//! While a request is outstanding, a transient "pending" bubble with an
//! animated ellipsis is drawn below the last message. It is presentation
//! only and never enters the conversation.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{ChatMessage, Conversation, Sender};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Animated ellipsis frames for the pending bubble.
const PENDING_FRAMES: &[&str] = &["·", "· ·", "· · ·"];

/// Scroll and layout state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached per-message heights from the last render
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    /// Scroll by a signed number of rows, clamped to the content bounds.
    /// Reaching the bottom re-enables stick-to-bottom.
    pub fn scroll_by(&mut self, delta: i32) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset().y as i32;
        let new_y = (current + delta).clamp(0, max_y as i32) as u16;
        self.scroll_state.set_offset(Position { x: 0, y: new_y });
        self.stick_to_bottom = new_y >= max_y;
    }

    /// Clamp the scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let page = self.viewport_height.max(1) as i32;
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => return None,
        }
        Some(())
    }
}

/// Transient rendering wrapper: conversation + waiting flag as props,
/// persistent state borrowed from TuiState.
pub struct MessageList<'a> {
    pub conversation: &'a Conversation,
    pub is_waiting: bool,
    pub spinner_frame: usize,
    pub state: &'a mut MessageListState,
}

impl<'a> MessageList<'a> {
    fn pending_message(&self) -> ChatMessage {
        ChatMessage {
            sender: Sender::Bot,
            text: PENDING_FRAMES[self.spinner_frame % PENDING_FRAMES.len()].to_string(),
        }
    }

    fn draw_empty_hint(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let hint = Paragraph::new("Type a message and press Enter")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
        // Vertically centered single line
        let hint_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(hint, hint_area);
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.conversation.is_empty() && !self.is_waiting {
            self.draw_empty_hint(frame, area);
            return;
        }

        // Reserve one column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let pending = self.is_waiting.then(|| self.pending_message());

        // Measure everything up front so the scroll view size is known
        let mut heights: Vec<u16> = self
            .conversation
            .iter()
            .map(|m| Message::calculate_height(&m.text, content_width))
            .collect();
        if let Some(ref p) = pending {
            heights.push(Message::calculate_height(&p.text, content_width));
        }

        self.state.heights = heights;
        self.state.viewport_height = area.height;

        let total_height = self.state.total_height();

        if self.state.stick_to_bottom {
            self.state.scroll_state.set_offset(Position {
                x: 0,
                y: self.state.max_scroll(),
            });
        } else {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (index, message) in self.conversation.iter().enumerate() {
            let height = self.state.heights[index];
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Message::new(message), rect);
            y_offset += height;
        }
        if let Some(ref p) = pending {
            let height = *self.state.heights.last().unwrap_or(&0);
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Message::new(p), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
