//! Reviewer votes ("user classifications")

use crate::consensus::{Classification, VoteTally};
use crate::core::error::DomainError;
use crate::core::ids::{EditId, UserId, VoteId};
use serde::{Deserialize, Serialize};

/// A recorded vote. Votes are append-only: once stored they are never
/// changed or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClassification {
    pub id: VoteId,
    pub user_id: UserId,
    pub edit_id: EditId,
    pub classification: Classification,
    pub comment: String,
}

/// A vote that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVote {
    pub user_id: UserId,
    pub edit_id: EditId,
    pub classification: Classification,
    pub comment: String,
}

impl NewVote {
    /// Create a vote. `Unknown` cannot be voted.
    pub fn new(
        user_id: UserId,
        edit_id: EditId,
        classification: Classification,
        comment: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !classification.is_votable() {
            return Err(DomainError::InvalidClassification(
                classification.to_string(),
            ));
        }
        Ok(Self {
            user_id,
            edit_id,
            classification,
            comment: comment.into(),
        })
    }

    pub fn into_recorded(self, id: VoteId) -> UserClassification {
        UserClassification {
            id,
            user_id: self.user_id,
            edit_id: self.edit_id,
            classification: self.classification,
            comment: self.comment,
        }
    }
}

/// Tally a slice of recorded votes
pub fn tally_votes(votes: &[UserClassification]) -> VoteTally {
    VoteTally::from_classifications(votes.iter().map(|v| v.classification))
}
