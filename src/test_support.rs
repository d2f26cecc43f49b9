//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ChatBackend};
use crate::core::state::App;

/// A canned backend for tests that don't need real HTTP.
pub struct StubBackend {
    pub reply: String,
}

#[async_trait]
impl ChatBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn send(&self, _message: &str, _user_email: &str) -> Result<String, ApiError> {
        Ok(self.reply.clone())
    }
}

/// Creates a test App with a StubBackend.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubBackend {
            reply: "stub reply".to_string(),
        }),
        "test@example.com".to_string(),
    )
}
