//! Error taxonomy shared by the use cases

use crate::ports::review_store::StoreError;
use crate::ports::upstream::SourceError;
use reviewng_domain::{DomainError, EditId, UserId};
use thiserror::Error;

/// Errors returned by use cases.
///
/// A vote that needs confirmation is not an error; see
/// [`SubmitVoteOutcome`](crate::use_cases::submit_vote::SubmitVoteOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] SourceError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] DomainError),
}

impl ReviewError {
    pub fn edit_not_found(id: EditId) -> Self {
        Self::NotFound {
            kind: "Edit",
            id: id.to_string(),
        }
    }

    pub fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            kind: "User",
            id: id.to_string(),
        }
    }

    pub fn group_name_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "Edit group",
            id: name.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReviewError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ReviewError::Conflict(_))
    }
}
