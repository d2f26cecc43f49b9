//! # TitleBar Component
//!
//! Top status bar: who we're chatting as, plus a transient status note.
//!
//! Stateless: both fields are props from the core `App`, rendered as a
//! single line. Formats:
//!
//! 1. With status:  `HR Chat (alex@company.com) | Waiting for reply...`
//! 2. Without:      `HR Chat (alex@company.com)`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Email the requests identify as
    pub user_email: String,
    /// Transient status (e.g. "Waiting for reply...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(user_email: String, status_message: String) -> Self {
        Self {
            user_email,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("HR Chat ({})", self.user_email)
        } else {
            format!("HR Chat ({}) | {}", self.user_email, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
