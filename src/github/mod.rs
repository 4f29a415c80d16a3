//! Accessors for the command, its issue, and the issue's repository.
//!
//! The check only ever talks to these traits. [`WebhookCommand`],
//! [`GithubIssue`] and [`GithubRepo`] back them with the GitHub REST API;
//! tests substitute in-memory fakes.

pub mod client;
pub mod command;
pub mod event;

use std::future::Future;
use std::pin::Pin;

use crate::Result;

pub use client::GithubClient;
pub use command::{GithubIssue, GithubRepo, WebhookCommand};
pub use event::IssueCommentEvent;

/// A repository reachable from an issue.
pub trait Repo: Send + Sync {
    /// Fetch the repository's JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be fetched.
    fn json(&self) -> Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send + '_>>;
}

/// The issue or pull request a command was posted on.
pub trait Issue: Send + Sync {
    /// Repository the issue belongs to.
    fn repo(&self) -> &dyn Repo;
}

/// One bot invocation.
pub trait Command: Send + Sync {
    /// Login of the account that posted the command.
    fn author_login(&self) -> &str;

    /// Issue the command was posted on.
    fn issue(&self) -> &dyn Issue;
}
