//! Shared error model.

use thiserror::Error;

/// Failure to parse a strongly-typed identifier from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct InvalidId(pub String);

/// Infrastructure failure surfaced by a collaborator behind a repository contract.
///
/// Keep this focused on storage/transport concerns. Business failures (validation,
/// invariants) belong to the use case that detects them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store rejected or failed the operation.
    #[error("storage failure: {0}")]
    Storage(String),

    /// The collaborator could not be reached.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
