//! REST-backed implementations of [`Command`], [`Issue`] and [`Repo`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::{Command, GithubClient, Issue, IssueCommentEvent, Repo};
use crate::Result;

/// Repository addressed by `owner/name`; metadata is fetched on every call.
#[derive(Debug, Clone)]
pub struct GithubRepo {
    client: Arc<GithubClient>,
    full_name: String,
}

impl GithubRepo {
    /// Reference `full_name` through `client`.
    #[must_use]
    pub fn new(client: Arc<GithubClient>, full_name: impl Into<String>) -> Self {
        Self {
            client,
            full_name: full_name.into(),
        }
    }

    /// `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl Repo for GithubRepo {
    fn json(&self) -> Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send + '_>> {
        Box::pin(self.client.repo_json(&self.full_name))
    }
}

/// Issue `number` in a [`GithubRepo`].
#[derive(Debug, Clone)]
pub struct GithubIssue {
    repo: GithubRepo,
    number: u64,
}

impl GithubIssue {
    /// Reference issue `number` of `repo`.
    #[must_use]
    pub fn new(repo: GithubRepo, number: u64) -> Self {
        Self { repo, number }
    }

    /// Issue number.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The concrete repository handle.
    #[must_use]
    pub fn github_repo(&self) -> &GithubRepo {
        &self.repo
    }
}

impl Issue for GithubIssue {
    fn repo(&self) -> &dyn Repo {
        &self.repo
    }
}

/// Command built from an `issue_comment` webhook event.
#[derive(Debug, Clone)]
pub struct WebhookCommand {
    author_login: String,
    body: String,
    issue: GithubIssue,
}

impl WebhookCommand {
    /// Build a command from `event`, resolving the repository through `client`.
    #[must_use]
    pub fn from_event(event: &IssueCommentEvent, client: Arc<GithubClient>) -> Self {
        let repo = GithubRepo::new(client, event.repository.full_name.clone());
        Self {
            author_login: event.comment.user.login.clone(),
            body: event.comment.body.clone(),
            issue: GithubIssue::new(repo, event.issue.number),
        }
    }

    /// Raw comment text; never interpreted here.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The concrete issue handle.
    #[must_use]
    pub fn github_issue(&self) -> &GithubIssue {
        &self.issue
    }
}

impl Command for WebhookCommand {
    fn author_login(&self) -> &str {
        &self.author_login
    }

    fn issue(&self) -> &dyn Issue {
        &self.issue
    }
}
