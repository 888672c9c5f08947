//! Error types for comai modules using thiserror.

use thiserror::Error;

/// Errors from building the runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found on PATH. Install git and try again.")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    Spawn {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },

    #[error("Failed to write commit message file: {0}")]
    MessageFile(#[source] std::io::Error),
}

/// Errors from the per-repository template store.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Not a git repository: {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Template content must not be empty")]
    Empty,

    #[error("Failed to read template: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write template: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from the chat-completion API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to send API request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Error from OpenAI API: {0}")]
    Api(String),

    #[error("OpenAI API responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

/// Errors from the end-to-end generation workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
