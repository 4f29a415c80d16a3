//! Authorization verdict for a single command.

use crate::models::repository::RepositoryMetadata;

/// Outcome of the author-ownership decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Author owns a non-fork repository.
    Authorized,
    /// Repository is a fork; ownership is not checked.
    Fork {
        /// Nominal owner of the fork.
        owner: String,
    },
    /// Author is not the owner of a non-fork repository.
    NotOwner {
        /// Login that issued the command.
        author: String,
        /// Login that owns the repository.
        owner: String,
    },
}

impl Verdict {
    /// Decide whether `author` may run privileged commands on `repo`.
    ///
    /// Forks are rejected before the owner comparison. Logins are compared
    /// exactly, case included.
    #[must_use]
    pub fn decide(author: &str, repo: &RepositoryMetadata) -> Self {
        if repo.fork {
            return Self::Fork {
                owner: repo.owner_login().to_owned(),
            };
        }
        if author == repo.owner_login() {
            Self::Authorized
        } else {
            Self::NotOwner {
                author: author.to_owned(),
                owner: repo.owner_login().to_owned(),
            }
        }
    }

    /// Whether the command may proceed.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }

    /// Short machine-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Fork { .. } => "fork",
            Self::NotOwner { .. } => "not_owner",
        }
    }
}
