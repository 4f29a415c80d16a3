//! Author-ownership gate for privileged commands.
//!
//! A command is allowed only when its author owns the target repository and
//! that repository is not a fork. Forks are rejected silently; a non-owner
//! gets exactly one reply on the issue thread.

use std::sync::Arc;

use tracing::{debug, info};

use crate::github::Command;
use crate::models::repository::RepositoryMetadata;
use crate::models::verdict::Verdict;
use crate::steps::ReplySender;
use crate::Result;

/// Decides whether a command's author may run it on the target repository.
///
/// Built fresh for each command and holds no state between calls.
pub struct AuthorOwnerCheck {
    command: Arc<dyn Command>,
    reply: Arc<dyn ReplySender>,
}

impl AuthorOwnerCheck {
    /// Create a check for `command`, notifying through `reply` on a
    /// wrong-author rejection.
    #[must_use]
    pub fn new(command: Arc<dyn Command>, reply: Arc<dyn ReplySender>) -> Self {
        Self { command, reply }
    }

    /// Run the check and return `true` if the command may proceed.
    ///
    /// # Errors
    ///
    /// Propagates any failure to fetch or decode the repository metadata.
    /// No reply is sent in that case.
    pub async fn perform(&self) -> Result<bool> {
        self.run().await.map(|verdict| verdict.is_authorized())
    }

    /// Run the check and return the detailed [`Verdict`].
    ///
    /// Sends the fallback reply only for [`Verdict::NotOwner`]. The reply's
    /// own outcome never changes the verdict.
    ///
    /// # Errors
    ///
    /// Propagates any failure to fetch or decode the repository metadata.
    pub async fn run(&self) -> Result<Verdict> {
        let author = self.command.author_login();
        let json = self.command.issue().repo().json().await?;
        let repo = RepositoryMetadata::from_json(&json)?;
        let verdict = Verdict::decide(author, &repo);

        match &verdict {
            Verdict::Authorized => {
                info!(author = %author, "author owns repository, command authorized");
            }
            Verdict::Fork { owner } => {
                info!(
                    author = %author,
                    owner = %owner,
                    "repository is a fork, command not authorized"
                );
            }
            Verdict::NotOwner { owner, .. } => {
                info!(
                    author = %author,
                    owner = %owner,
                    "author is not the repository owner, sending reply"
                );
                let delivered = self.reply.perform().await;
                debug!(delivered, "fallback reply finished");
            }
        }

        Ok(verdict)
    }
}
