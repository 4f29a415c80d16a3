//! `issue_comment` webhook payload.

use serde::Deserialize;

use crate::{AppError, Result};

/// Comment action reported by the webhook.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueCommentAction {
    /// New comment.
    Created,
    /// Comment body changed.
    Edited,
    /// Comment removed.
    Deleted,
}

/// A GitHub account reference.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EventUser {
    /// Account login.
    pub login: String,
}

/// The comment carrying the command.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EventComment {
    /// Comment identifier.
    pub id: u64,
    /// Raw comment text.
    #[serde(default)]
    pub body: String,
    /// Comment author.
    pub user: EventUser,
}

/// Issue or pull request the comment was posted on.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EventIssue {
    /// Issue number within the repository.
    pub number: u64,
}

/// Repository reference carried by the event.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EventRepository {
    /// `owner/name`.
    pub full_name: String,
}

/// Decoded `issue_comment` webhook event.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IssueCommentEvent {
    /// What happened to the comment.
    pub action: IssueCommentAction,
    /// The comment itself.
    pub comment: EventComment,
    /// Target issue.
    pub issue: EventIssue,
    /// Target repository.
    pub repository: EventRepository,
}

impl IssueCommentEvent {
    /// Decode an event from its JSON body.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Event` if the payload is not a valid
    /// `issue_comment` event.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| AppError::Event(format!("invalid issue_comment payload: {err}")))
    }
}
