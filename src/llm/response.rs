//! Parsing of chat-completion response bodies.

use crate::error::ApiError;

use super::types::ChatResponse;

/// What the API returned: a generated message or an API-reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Message(String),
    Error(String),
}

/// Parse a response body.
///
/// A body with an `error` object yields [`Completion::Error`] and no message,
/// even if `choices` is also present. Otherwise the content of the first
/// choice is returned exactly as sent.
pub fn parse_response(body: &str) -> Result<Completion, ApiError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::MalformedResponse(format!("invalid JSON: {e}")))?;

    if let Some(error) = response.error {
        let message = error
            .message
            .unwrap_or_else(|| "unknown error (no message in response)".to_string());
        return Ok(Completion::Error(message));
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedResponse("response has no choices".to_string()))?;

    choice
        .message
        .content
        .map(Completion::Message)
        .ok_or_else(|| ApiError::MalformedResponse("first choice has no content".to_string()))
}

/// Tidy a generated message before it is handed to git.
///
/// Trims surrounding whitespace and unwraps a markdown code fence
/// (` ``` ` or ` ```text `) if the model put the whole message in one.
pub fn clean_message(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix("```")
        && let Some(inner) = rest.strip_suffix("```")
    {
        // Drop the info string (e.g. "text") on the opening fence line.
        let body = match inner.find('\n') {
            Some(idx) => &inner[idx + 1..],
            None => inner,
        };
        return body.trim().to_string();
    }

    trimmed.to_string()
}
