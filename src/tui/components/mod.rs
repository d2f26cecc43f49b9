//! # TUI Components
//!
//! Stateless components receive all data as props each frame (`TitleBar`,
//! `Message`); stateful ones keep local state and emit events (`InputBox`,
//! `MessageList`). Each component file co-locates its state, event, and
//! rendering logic with its tests.

pub mod input_box;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
