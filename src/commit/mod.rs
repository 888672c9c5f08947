//! AI-generated commit messages: payload building and the generation workflow.

pub mod prompt;
pub mod workflow;

pub use prompt::{build_request, format_diff};
pub use workflow::{ApplyMode, GenerateOptions, Outcome, generate, pick_explanation};
