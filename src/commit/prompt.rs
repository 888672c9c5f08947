//! Payload construction for AI-generated commit messages.

use crate::llm::{ChatMessage, ChatRequest};

/// Instruction sent as the system message of every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful git commit assistant, you will receive a git diff and you will generate a commit message, try be meaningful and avoid generic messages.";

/// Appended to the system instruction, followed by the template text.
pub const TEMPLATE_PREFIX: &str = " This message should follow the following template: ";

/// Prefix of the optional high-level explanation message.
pub const EXPLANATION_PREFIX: &str = "Here is a high level explanation of the commit: ";

/// Prefix the diff with `<repo>/<branch>` so the model sees where it lives.
pub fn format_diff(repo_name: &str, branch: &str, diff: &str) -> String {
    format!("{repo_name}/{branch}\n\n{diff}")
}

/// Build the chat request for a formatted diff.
///
/// Messages are always ordered: system instruction, the explanation (only
/// when non-empty), then the diff.
pub fn build_request(
    model: &str,
    formatted_diff: &str,
    template: Option<&str>,
    explanation: Option<&str>,
) -> ChatRequest {
    let mut system = SYSTEM_INSTRUCTION.to_string();
    if let Some(template) = template.filter(|t| !t.is_empty()) {
        system.push_str(TEMPLATE_PREFIX);
        system.push_str(template);
    }

    let mut messages = vec![ChatMessage::system(system)];

    if let Some(explanation) = explanation.filter(|e| !e.is_empty()) {
        messages.push(ChatMessage::user(format!("{EXPLANATION_PREFIX}{explanation}")));
    }

    messages.push(ChatMessage::user(formatted_diff));

    ChatRequest {
        model: model.to_string(),
        messages,
    }
}
