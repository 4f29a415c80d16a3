//! Fallback reply posted as an issue comment.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{info, warn};

use crate::github::{GithubClient, GithubIssue};
use crate::steps::ReplySender;

/// Posts a fixed comment on the command's issue.
pub struct SendReply {
    client: Arc<GithubClient>,
    full_name: String,
    number: u64,
    body: String,
}

impl SendReply {
    /// Reply on `issue` with `body`.
    #[must_use]
    pub fn new(client: Arc<GithubClient>, issue: &GithubIssue, body: impl Into<String>) -> Self {
        Self {
            client,
            full_name: issue.github_repo().full_name().to_owned(),
            number: issue.number(),
            body: body.into(),
        }
    }
}

impl ReplySender for SendReply {
    fn perform(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move {
            match self
                .client
                .post_comment(&self.full_name, self.number, &self.body)
                .await
            {
                Ok(()) => {
                    info!(repo = %self.full_name, issue = self.number, "reply posted");
                    true
                }
                Err(err) => {
                    warn!(
                        repo = %self.full_name,
                        issue = self.number,
                        %err,
                        "failed to post reply"
                    );
                    false
                }
            }
        })
    }
}
