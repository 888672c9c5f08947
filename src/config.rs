//! Runtime configuration assembled once from the environment.
//!
//! Nothing else in the crate reads environment variables; `main` builds a
//! [`Config`] and hands it to every entry point.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable holding the bearer token for the API.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the fallback commit template.
pub const TEMPLATE_ENV_VAR: &str = "TEMPLATE_COMMIT";

/// Environment variable overriding the chat-completion endpoint.
pub const API_URL_ENV_VAR: &str = "COMAI_API_URL";

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_template: Option<String>,
    pub api_url: String,
    pub workdir: PathBuf,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_env(workdir: &Path) -> Self {
        let api_url = non_empty_var(API_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        debug!(api_url = %api_url, workdir = %workdir.display(), "Loaded configuration");

        Self {
            api_key: non_empty_var(API_KEY_ENV_VAR),
            default_template: non_empty_var(TEMPLATE_ENV_VAR),
            api_url,
            workdir: workdir.to_path_buf(),
        }
    }

    /// The API key, required before any generation request.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
