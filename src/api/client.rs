//! HTTP backend for the HR assistant service.
//!
//! The server exposes a single `POST /chat` endpoint taking
//! `{ "message": ..., "user_email": ... }` and answering
//! `{ "response": ... }`. Anything else is a failure.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::backend::{ApiError, ChatBackend};
use super::types::{ChatRequest, ChatResponse};

/// Chat backend speaking JSON over HTTP to the HR assistant server.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            // Tolerate a trailing slash in configured URLs
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &str, user_email: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
            user_email: user_email.to_string(),
        };

        info!(
            "Sending chat request: {} chars, user_email={}",
            message.len(),
            user_email
        );

        // reqwest's .json() sets Content-Type: application/json
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Chat response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Chat API error: {} - {}", status.as_u16(), err_body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        info!("Received reply: {} chars", chat_response.response.len());
        Ok(chat_response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let backend = HttpBackend::new("http://localhost:5000/".to_string());
        assert_eq!(backend.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_base_url_kept_as_given() {
        let backend = HttpBackend::new("http://192.168.1.10:5000".to_string());
        assert_eq!(backend.base_url(), "http://192.168.1.10:5000");
    }
}
