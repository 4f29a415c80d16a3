//! Handles one `issue_comment` event end to end.
//!
//! Only newly created comments carry a command; edits and deletions are
//! skipped so a single command never collects more than one reply.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::GlobalConfig;
use crate::github::event::IssueCommentAction;
use crate::github::{GithubClient, IssueCommentEvent, WebhookCommand};
use crate::models::verdict::Verdict;
use crate::steps::{AuthorOwnerCheck, SendReply};
use crate::Result;

/// Process exit status when the command may proceed.
pub const EXIT_AUTHORIZED: u8 = 0;
/// Process exit status when the command must not run.
pub const EXIT_DENIED: u8 = 1;
/// Process exit status when the check could not complete.
pub const EXIT_FAILED: u8 = 2;

/// What the runner did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The comment was not newly created; nothing was checked.
    Skipped(IssueCommentAction),
    /// The check ran and produced a verdict.
    Decided(Verdict),
}

impl Outcome {
    /// Short machine-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skipped(_) => "skipped",
            Self::Decided(verdict) => verdict.label(),
        }
    }

    /// Exit status for the bot framework.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Decided(verdict) if verdict.is_authorized() => EXIT_AUTHORIZED,
            Self::Skipped(_) | Self::Decided(_) => EXIT_DENIED,
        }
    }
}

/// Run the author-ownership check for `event`.
///
/// # Errors
///
/// Returns the metadata fetch or decode error unchanged; no reply is sent
/// in that case.
pub async fn handle_event(
    config: &GlobalConfig,
    event: &IssueCommentEvent,
    token: Option<String>,
) -> Result<Outcome> {
    if event.action != IssueCommentAction::Created {
        info!(
            action = ?event.action,
            repo = %event.repository.full_name,
            issue = event.issue.number,
            "comment not newly created, skipping"
        );
        return Ok(Outcome::Skipped(event.action));
    }

    let client = Arc::new(GithubClient::new(&config.github, token)?);
    let command = Arc::new(WebhookCommand::from_event(event, Arc::clone(&client)));
    let reply = Arc::new(SendReply::new(
        client,
        command.github_issue(),
        config.replies.render_not_owner(&event.comment.user.login),
    ));

    let check = AuthorOwnerCheck::new(command, reply);
    check.run().await.map(Outcome::Decided)
}

/// Map a handled event to an exit status, logging failures.
#[must_use]
pub fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_status(),
        Err(err) => {
            error!(%err, "authorization check failed");
            EXIT_FAILED
        }
    }
}
