//! # Actions
//!
//! Everything that can happen in hrchat becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Server replies? That's `Action::ReplyReceived`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere: when
//! an action requires work outside the state (spawning the HTTP request),
//! `update()` returns an `Effect` and the event loop carries it out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole exchange cycle testable without a terminal or a
//! network: feed actions in, assert on the conversation.

use log::{debug, info};

use crate::core::state::App;

/// Shown as a bot message whenever the request/response cycle fails,
/// regardless of why. The real error only goes to the log.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted the draft input.
    Submit(String),
    /// The backend returned a reply.
    ReplyReceived(String),
    /// The request failed; the payload is the error detail for the log.
    RequestFailed(String),
    /// User asked to quit.
    Quit,
}

/// Work the event loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue one request carrying this message text.
    SpawnRequest(String),
    Quit,
}

/// The reducer: applies an action to the state and returns the follow-up
/// effect. Every state transition in the app goes through here.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let trimmed = text.trim();
            // Empty or whitespace-only input is a no-op
            if trimmed.is_empty() {
                return Effect::None;
            }
            // At most one request in flight: reject sends while waiting
            if app.is_waiting {
                debug!("Submit rejected: request already in flight");
                return Effect::None;
            }

            let message = trimmed.to_string();
            app.conversation.add_user(message.clone());
            app.is_waiting = true;
            app.status_message = String::from("Waiting for reply...");
            Effect::SpawnRequest(message)
        }
        Action::ReplyReceived(text) => {
            app.conversation.add_bot(text);
            app.is_waiting = false;
            app.status_message = String::new();
            Effect::None
        }
        Action::RequestFailed(detail) => {
            // Failure detail stays in the log; the user sees one fixed string
            info!("Exchange failed: {}", detail);
            app.conversation.add_bot(FALLBACK_REPLY.to_string());
            app.is_waiting = false;
            app.status_message = String::new();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
