//! Git operations: the system `git` binary for repository work, git2 for
//! locating the metadata directory.

pub mod command;
pub mod repo;
pub mod template;

pub use command::check_git_installed;
pub use repo::{GitCli, VersionControl};
pub use template::{TemplateStore, resolve_template};
