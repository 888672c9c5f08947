//! End-to-end generation: collect context, call the API, apply the result.

use std::io::Write;

use tracing::{debug, info};

use crate::commit::prompt::{build_request, format_diff};
use crate::config::Config;
use crate::error::{GitError, WorkflowError};
use crate::git::{TemplateStore, VersionControl, resolve_template};
use crate::llm::{ChatClient, clean_message};

/// What to do with the generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    /// Open the message in the user's editor via `git commit -e`.
    #[default]
    Edit,
    /// Commit straight away with the message.
    Commit,
    /// Only return the message; git is left untouched.
    Print,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub model: String,
    pub stage_all: bool,
    /// Template override; beats the stored and default templates.
    pub template: Option<String>,
    pub explanation: Option<String>,
    pub mode: ApplyMode,
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was staged; no request was made.
    NoChanges,
    Printed(String),
    /// The suggested message was handed to the editor.
    Edited(String),
    Committed(String),
}

/// Positional explanation takes precedence over the `--explanation` flag.
pub fn pick_explanation(positional: Option<String>, flag: Option<String>) -> Option<String> {
    positional
        .filter(|e| !e.is_empty())
        .or_else(|| flag.filter(|e| !e.is_empty()))
}

/// Generate a commit message for the staged changes and apply it.
pub async fn generate(
    config: &Config,
    options: &GenerateOptions,
    vcs: &dyn VersionControl,
    templates: &TemplateStore,
    client: &dyn ChatClient,
) -> Result<Outcome, WorkflowError> {
    config.api_key()?;

    if options.stage_all {
        vcs.stage_all()?;
    }

    let diff = vcs.staged_diff()?;
    if diff.is_empty() {
        return Ok(Outcome::NoChanges);
    }

    let repo_name = vcs.repository_name()?;
    let branch = vcs.current_branch()?;
    let formatted = format_diff(&repo_name, &branch, &diff);

    let has_flag = options
        .template
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let stored = if has_flag {
        None
    } else {
        templates.load()?
    };
    let template = resolve_template(
        options.template.as_deref(),
        stored,
        config.default_template.as_deref(),
    );
    debug!(
        repository = %repo_name,
        branch = %branch,
        has_template = template.is_some(),
        has_explanation = options.explanation.is_some(),
        "Building chat request"
    );

    let request = build_request(
        &options.model,
        &formatted,
        template.as_deref(),
        options.explanation.as_deref(),
    );

    let raw = client.complete(&request).await?;
    let message = clean_message(&raw);

    match options.mode {
        ApplyMode::Print => Ok(Outcome::Printed(message)),
        ApplyMode::Commit => {
            vcs.commit(&message)?;
            info!("Created commit");
            Ok(Outcome::Committed(message))
        }
        ApplyMode::Edit => {
            edit_and_commit(vcs, &message)?;
            Ok(Outcome::Edited(message))
        }
    }
}

/// Write the message to a temp file and let git open it in the editor.
///
/// The file is removed when this function returns.
fn edit_and_commit(vcs: &dyn VersionControl, message: &str) -> Result<(), GitError> {
    let mut file = tempfile::Builder::new()
        .prefix("commit-")
        .suffix(".txt")
        .tempfile()
        .map_err(GitError::MessageFile)?;
    file.write_all(message.as_bytes())
        .and_then(|_| file.flush())
        .map_err(GitError::MessageFile)?;

    vcs.commit_with_editor(file.path())
}
