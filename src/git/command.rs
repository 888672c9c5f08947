//! Thin wrappers around the system `git` binary.
//!
//! All operations use `std::process::Command` to shell out to `git`, inheriting
//! the user's git config, hooks, and editor settings.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::GitError;

/// Check that a `git` executable is available on `PATH`.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Run a git command in `workdir` and return its stdout.
///
/// A non-zero exit is turned into [`GitError::CommandFailed`] carrying the
/// trimmed stderr.
pub fn run_git(workdir: &Path, args: &[&str], operation: &str) -> Result<String, GitError> {
    debug!(?args, "Running git {}", operation);

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|source| GitError::Spawn {
            operation: operation.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::CommandFailed {
            operation: operation.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a git command attached to the user's terminal.
///
/// Used when git needs to open an editor, so stdin, stdout and stderr are
/// inherited instead of captured.
pub fn run_git_interactive(workdir: &Path, args: &[&str], operation: &str) -> Result<(), GitError> {
    debug!(?args, "Running interactive git {}", operation);

    let status = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| GitError::Spawn {
            operation: operation.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(GitError::CommandFailed {
            operation: operation.to_string(),
            stderr: match status.code() {
                Some(code) => format!("exited with code {code}"),
                None => "terminated by signal".to_string(),
            },
        });
    }

    Ok(())
}
