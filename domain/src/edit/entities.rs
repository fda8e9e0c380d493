//! Edit and edit group entities

use crate::consensus::{Classification, EditStatus, VoteTally};
use crate::core::error::DomainError;
use crate::core::ids::{EditId, GroupId};
use serde::{Deserialize, Serialize};

/// A historical edit that reviewers classify.
///
/// `classification` is the administrative classification recorded when the
/// edit was imported. It is independent of reviewer votes; the consensus
/// verdict is always derived from the vote log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub id: EditId,
    /// Minimum votes the winning class needs before the edit can settle
    pub required: u32,
    pub classification: Classification,
}

impl Edit {
    pub fn new(
        id: EditId,
        required: u32,
        classification: Classification,
    ) -> Result<Self, DomainError> {
        if required == 0 {
            return Err(DomainError::InvalidRequired);
        }
        Ok(Self {
            id,
            required,
            classification,
        })
    }
}

/// A prioritised batch of edits. Lower weights are reviewed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditGroup {
    pub id: GroupId,
    pub name: String,
    pub weight: i32,
}

impl EditGroup {
    pub fn new(id: GroupId, name: impl Into<String>, weight: i32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

/// An edit together with the tally of its current votes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditReview {
    pub edit: Edit,
    pub tally: VoteTally,
}

impl EditReview {
    pub fn new(edit: Edit, tally: VoteTally) -> Self {
        Self { edit, tally }
    }

    pub fn status(&self) -> EditStatus {
        self.tally.status(self.edit.required)
    }

    /// The settled consensus classification
    pub fn consensus(&self) -> Classification {
        self.tally.classification(self.edit.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_required_is_rejected() {
        let result = Edit::new(EditId::new(1), 0, Classification::Unknown);
        assert_eq!(result.unwrap_err(), DomainError::InvalidRequired);
    }

    #[test]
    fn test_review_uses_edit_threshold() {
        let edit = Edit::new(EditId::new(1), 3, Classification::Constructive).unwrap();
        let review = EditReview::new(edit, VoteTally::new(0, 2, 0));
        assert_eq!(review.status(), EditStatus::Partial);
        assert_eq!(review.consensus(), Classification::Unknown);
    }
}
