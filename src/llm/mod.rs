//! Chat-completion API: wire types, HTTP client, and response parsing.

pub mod client;
pub mod response;
pub mod types;

pub use client::{ChatClient, OpenAiClient};
pub use response::{Completion, clean_message, parse_response};
pub use types::{ChatMessage, ChatRequest, Role};
