//! Inspect edit use case: one edit with its tally, status and votes.

use super::shared::review_edit;
use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use reviewng_domain::{EditId, EditReview, UserClassification};
use serde::Serialize;
use std::sync::Arc;

/// An edit's review state plus the individual votes behind it
#[derive(Debug, Clone, Serialize)]
pub struct EditDetails {
    pub review: EditReview,
    pub votes: Vec<UserClassification>,
}

pub struct InspectEditUseCase {
    store: Arc<dyn ReviewStore>,
}

impl InspectEditUseCase {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, edit_id: EditId) -> Result<EditDetails, ReviewError> {
        let edit = self
            .store
            .get_edit(edit_id)
            .await?
            .ok_or_else(|| ReviewError::edit_not_found(edit_id))?;

        let review = review_edit(self.store.as_ref(), edit).await?;
        let mut votes = self.store.votes_for_edit(edit_id).await?;
        votes.sort_by_key(|v| v.id);

        Ok(EditDetails { review, votes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockStore;
    use reviewng_domain::{Classification, EditStatus};

    #[tokio::test]
    async fn test_details_of_partial_edit() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 10, 3)
            .with_vote(1, 10, Classification::Vandalism)
            .with_vote(2, 10, Classification::Skip);
        let use_case = InspectEditUseCase::new(Arc::new(store));

        let details = use_case.execute(EditId::new(10)).await.unwrap();
        assert_eq!(details.review.status(), EditStatus::Partial);
        assert_eq!(details.review.consensus(), Classification::Unknown);
        assert_eq!(details.votes.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_edit() {
        let use_case = InspectEditUseCase::new(Arc::new(MockStore::new()));
        let err = use_case.execute(EditId::new(1)).await.unwrap_err();
        assert_eq!(err, ReviewError::edit_not_found(EditId::new(1)));
    }
}
