//! comai - A CLI tool that writes commit messages for staged changes.
//!
//! # Overview
//!
//! comai reads the staged diff of a git repository, sends it to an
//! OpenAI-compatible chat-completion endpoint, and either opens the
//! suggested message in the user's editor, commits it directly, or prints it.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;

// Re-export commonly used types
pub use commit::{ApplyMode, GenerateOptions, Outcome};
pub use config::Config;
pub use error::{ApiError, ConfigError, GitError, TemplateError, WorkflowError};
pub use llm::{ChatClient, ChatMessage, ChatRequest, Completion, OpenAiClient, Role};
