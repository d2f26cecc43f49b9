//! # Application State
//!
//! Core business state for hrchat. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>  // chat service transport
//! ├── conversation: Conversation     // ordered message history
//! ├── user_email: String             // identifying field sent with requests
//! ├── status_message: String         // status bar text
//! └── is_waiting: bool               // one request in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::{ChatBackend, Conversation};
use crate::core::config::ResolvedConfig;
use std::sync::Arc;

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub conversation: Conversation,
    pub user_email: String,
    pub status_message: String,
    /// True while exactly one request is outstanding. New sends are
    /// rejected until it clears.
    pub is_waiting: bool,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, user_email: String) -> Self {
        Self {
            backend,
            conversation: Conversation::new(),
            user_email,
            status_message: String::from("Ask the HR assistant anything"),
            is_waiting: false,
        }
    }

    pub fn from_config(backend: Arc<dyn ChatBackend>, config: &ResolvedConfig) -> Self {
        Self::new(backend, config.user_email.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Ask the HR assistant anything");
        assert!(!app.is_waiting);
        assert!(app.conversation.is_empty());
        assert_eq!(app.user_email, "test@example.com");
    }
}
