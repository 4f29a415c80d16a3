//! Repository metadata consumed by the author-ownership check.

use serde::Deserialize;

use crate::{AppError, Result};

/// Account that owns a repository.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryOwner {
    /// Login of the owning user or organization.
    pub login: String,
}

/// The subset of a GitHub repository object the check reads.
///
/// Fetched fresh for every check; never cached.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Owning account.
    pub owner: RepositoryOwner,
    /// Whether the repository is a fork of another repository.
    pub fork: bool,
}

impl RepositoryMetadata {
    /// Decode metadata from a repository JSON object.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Metadata` if `owner.login` or `fork` is missing
    /// or has the wrong type.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::deserialize(value)
            .map_err(|err| AppError::Metadata(format!("invalid repository json: {err}")))
    }

    /// Login of the owning account.
    #[must_use]
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}
