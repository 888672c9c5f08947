//! HTTP client for the chat-completion endpoint.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::error::ApiError;

use super::response::{Completion, parse_response};
use super::types::ChatRequest;

/// Trait for sending a chat request and getting the generated text back.
///
/// This abstraction allows mocking the HTTP call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ApiError>;
}

/// [`ChatClient`] for OpenAI-compatible `/chat/completions` endpoints.
pub struct OpenAiClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    /// Send one POST request. Nothing is retried.
    ///
    /// A body carrying `error.message` is reported as [`ApiError::Api`]
    /// whatever the status; any other non-2xx response is
    /// [`ApiError::Status`].
    async fn complete(&self, request: &ChatRequest) -> Result<String, ApiError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::ReadBody)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            warn!("Chat completion endpoint responded with {status}");
            return match parse_response(&body) {
                Ok(Completion::Error(message)) => Err(ApiError::Api(message)),
                _ => Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        match parse_response(&body)? {
            Completion::Message(message) => Ok(message),
            Completion::Error(message) => Err(ApiError::Api(message)),
        }
    }
}
