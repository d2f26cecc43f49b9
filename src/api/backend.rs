use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to the chat service.
/// The UI collapses all of these into one generic failure message;
/// the variants exist so the log can say what actually happened.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server returned a non-success status.
    Api { status: u16, message: String },
    /// The response body was missing or malformed.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The seam between the UI and the chat service.
///
/// Implementors encapsulate transport and serialization details, so the
/// core stays decoupled from reqwest and testable with stubs.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the name of the backend (for logging).
    fn name(&self) -> &str;

    /// Sends one user message and returns the bot's reply text.
    /// Exactly one request, no retries.
    async fn send(&self, message: &str, user_email: &str) -> Result<String, ApiError>;
}
