//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Waiting for a reply**: draws every ~120ms to animate the pending
//!   bubble.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! The single suspension point is the spawned HTTP task; it reports back
//! over an mpsc channel as an `Action`, so the event loop stays responsive
//! (scrolling, editing) while exactly one request is in flight.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, error, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{ChatBackend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the background request task
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Animate the pending bubble while a request is outstanding
        let animating = app.is_waiting;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 3.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,

                TuiEvent::ForceQuit | TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                    continue;
                }

                // Scroll events go to the MessageList
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                    continue;
                }

                _ => {}
            }

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        if app.is_waiting {
                            // One request at a time: keep the draft instead
                            // of dropping the user's text
                            tui.input_box.set_text(text);
                            app.status_message =
                                String::from("Still waiting for the last reply...");
                        } else if let Effect::SpawnRequest(message) =
                            update(&mut app, Action::Submit(text))
                        {
                            spawn_request(&app, message, tx.clone());
                        }
                    }
                    InputEvent::ContentChanged => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Fold in results from the background request task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::SpawnRequest(message) => {
                    spawn_request(&app, message, tx.clone());
                }
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Issues the one outbound request for an exchange. The spawned task
/// always reports back with exactly one action (reply or failure), so the
/// waiting flag is guaranteed to clear.
fn spawn_request(app: &App, message: String, tx: mpsc::Sender<Action>) {
    info!("Spawning chat request via {} backend", app.backend.name());

    let backend = app.backend.clone();
    let user_email = app.user_email.clone();

    tokio::spawn(async move {
        let action = match backend.send(&message, &user_email).await {
            Ok(reply) => Action::ReplyReceived(reply),
            Err(e) => {
                error!("Chat request failed: {}", e);
                Action::RequestFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver backend result: receiver dropped");
        }
    });
}
