//! # Chat Service API
//!
//! Everything needed to talk to the HR assistant server: the domain
//! types ([`Conversation`], [`ChatMessage`]), the wire types, and the
//! [`ChatBackend`] trait with its HTTP implementation.

pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, ChatBackend};
pub use client::HttpBackend;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Conversation, Sender};
