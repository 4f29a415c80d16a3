//! Global configuration parsing and validation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{AppError, Result};

/// GitHub REST API connectivity settings.
///
/// Tokens are never read from the TOML file; the runner passes one in
/// from the environment when available.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GithubConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl GithubConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".into()
}

fn default_user_agent() -> String {
    "issue-commander".into()
}

fn default_request_timeout() -> u64 {
    30
}

/// Comment templates posted back on the issue thread.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ReplyConfig {
    /// Posted when the command author does not own the repository.
    /// `{author}` is replaced with the author's login.
    #[serde(default = "default_not_owner_reply")]
    pub not_owner: String,
}

impl ReplyConfig {
    /// Render the not-owner reply for `author`.
    #[must_use]
    pub fn render_not_owner(&self, author: &str) -> String {
        self.not_owner.replace("{author}", author)
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            not_owner: default_not_owner_reply(),
        }
    }
}

fn default_not_owner_reply() -> String {
    "@{author} sorry, only the owner of this repository can run this command.".into()
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,
    /// Reply templates.
    #[serde(default)]
    pub replies: ReplyConfig,
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        let api_url = self.github.api_url.trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "github.api_url must be an http(s) url, got {api_url:?}"
            )));
        }
        self.github.api_url = api_url.to_owned();

        if self.github.request_timeout_seconds == 0 {
            return Err(AppError::Config(
                "github.request_timeout_seconds must be greater than zero".into(),
            ));
        }

        if self.replies.not_owner.trim().is_empty() {
            return Err(AppError::Config("replies.not_owner must not be empty".into()));
        }

        Ok(())
    }
}
