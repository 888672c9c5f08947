//! Repository queries and mutations used by the generation workflow.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GitError;

use super::command::{run_git, run_git_interactive};

/// Version-control operations needed to generate and apply a commit message.
///
/// This abstraction allows the workflow to be tested without a real repository.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Stage every change in the working tree (`git add --all`).
    fn stage_all(&self) -> Result<(), GitError>;

    /// The staged diff, verbatim. Empty when nothing is staged.
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Short repository name (last component of the top-level directory).
    fn repository_name(&self) -> Result<String, GitError>;

    /// Name of the checked-out branch, or `HEAD` when detached.
    fn current_branch(&self) -> Result<String, GitError>;

    /// Commit the staged changes with `message`.
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Commit the staged changes, letting the user edit the message in
    /// `message_file` with their configured editor first.
    fn commit_with_editor(&self, message_file: &Path) -> Result<(), GitError>;

    /// Move HEAD back `steps` commits, keeping changes in the working tree.
    fn reset_back(&self, steps: u32) -> Result<(), GitError>;
}

/// [`VersionControl`] backed by the system `git` binary.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Absolute path of the repository's top-level directory.
    pub fn repository_root(&self) -> Result<PathBuf, GitError> {
        let stdout = run_git(&self.workdir, &["rev-parse", "--show-toplevel"], "rev-parse")?;
        Ok(PathBuf::from(stdout.trim()))
    }
}

impl VersionControl for GitCli {
    fn stage_all(&self) -> Result<(), GitError> {
        run_git(&self.workdir, &["add", "--all"], "add").map(|_| ())
    }

    fn staged_diff(&self) -> Result<String, GitError> {
        let diff = run_git(&self.workdir, &["diff", "--staged"], "diff")?;
        debug!("Staged diff is {} bytes", diff.len());
        Ok(diff)
    }

    fn repository_name(&self) -> Result<String, GitError> {
        let root = self.repository_root()?;
        Ok(repository_name_from_root(&root))
    }

    fn current_branch(&self) -> Result<String, GitError> {
        match run_git(&self.workdir, &["rev-parse", "--abbrev-ref", "HEAD"], "rev-parse") {
            Ok(stdout) => Ok(stdout.trim().to_string()),
            // Unborn branch: HEAD does not resolve yet, but the symbolic ref exists.
            Err(err) => match run_git(&self.workdir, &["symbolic-ref", "--short", "HEAD"], "symbolic-ref") {
                Ok(stdout) => Ok(stdout.trim().to_string()),
                Err(_) => Err(err),
            },
        }
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        run_git(&self.workdir, &["commit", "-m", message], "commit").map(|_| ())
    }

    fn commit_with_editor(&self, message_file: &Path) -> Result<(), GitError> {
        let path = message_file.to_string_lossy();
        run_git_interactive(&self.workdir, &["commit", "-e", "-F", &path], "commit")
    }

    fn reset_back(&self, steps: u32) -> Result<(), GitError> {
        let target = format!("HEAD~{steps}");
        run_git(&self.workdir, &["reset", &target], "reset").map(|_| ())
    }
}

/// Last path component of a repository root, or the whole path if it has none.
pub fn repository_name_from_root(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}
