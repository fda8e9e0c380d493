//! Next edit use case
//!
//! Picks the next edit a reviewer should classify. Groups are scanned in
//! ascending weight order and edits within a group in ascending id order.
//! The first edit the reviewer has not voted on and whose consensus is still
//! unknown is returned. That includes edits that reached their required vote
//! count without a clear majority, since a fresh vote may break the tie.

use super::shared::{group_edits, groups_by_priority, review_edit};
use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use reviewng_domain::{Edit, EditId, UserId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Use case for selecting the next edit to review
pub struct NextEditUseCase {
    store: Arc<dyn ReviewStore>,
}

impl NextEditUseCase {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Returns `None` when nothing is left for this reviewer.
    pub async fn execute(&self, user_id: UserId) -> Result<Option<Edit>, ReviewError> {
        if self.store.get_user(user_id).await?.is_none() {
            return Err(ReviewError::user_not_found(user_id));
        }

        let voted: HashSet<EditId> = self
            .store
            .votes_by_user(user_id)
            .await?
            .into_iter()
            .map(|v| v.edit_id)
            .collect();

        for group in groups_by_priority(self.store.as_ref()).await? {
            for edit in group_edits(self.store.as_ref(), &group).await? {
                if voted.contains(&edit.id) {
                    continue;
                }

                let review = review_edit(self.store.as_ref(), edit).await?;
                if review.consensus().is_unknown() {
                    debug!(
                        "Selected edit {} from group '{}' for user {}",
                        review.edit.id, group.name, user_id
                    );
                    return Ok(Some(review.edit));
                }
            }
        }

        debug!("No pending edits for user {}", user_id);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockStore;
    use reviewng_domain::Classification;

    #[tokio::test]
    async fn test_lowest_weight_group_first() {
        let store = MockStore::new()
            .with_group(1, "Backlog", 10)
            .with_group(2, "Urgent", 1)
            .with_edit(1, 500, 2)
            .with_edit(2, 900, 2)
            .with_user(1, "alice");
        let use_case = NextEditUseCase::new(Arc::new(store));

        let edit = use_case.execute(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(edit.id, EditId::new(900));
    }

    #[tokio::test]
    async fn test_edits_in_ascending_id_within_group() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 30, 2)
            .with_edit(1, 10, 2)
            .with_edit(1, 20, 2)
            .with_user(1, "alice");
        let use_case = NextEditUseCase::new(Arc::new(store));

        let edit = use_case.execute(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(edit.id, EditId::new(10));
    }

    #[tokio::test]
    async fn test_skips_edits_already_voted_on() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 10, 3)
            .with_edit(1, 20, 3)
            .with_user(1, "alice")
            .with_vote(1, 10, Classification::Skip);
        let use_case = NextEditUseCase::new(Arc::new(store));

        let edit = use_case.execute(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(edit.id, EditId::new(20));
    }

    #[tokio::test]
    async fn test_skips_settled_edits() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 10, 2)
            .with_edit(1, 20, 2)
            .with_user(1, "alice")
            .with_user(2, "bob")
            .with_user(3, "carol")
            .with_vote(2, 10, Classification::Vandalism)
            .with_vote(3, 10, Classification::Vandalism);
        let use_case = NextEditUseCase::new(Arc::new(store));

        let edit = use_case.execute(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(edit.id, EditId::new(20));
    }

    #[tokio::test]
    async fn test_done_but_tied_edit_still_offered() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 10, 2)
            .with_user(1, "alice")
            .with_user(2, "bob")
            .with_user(3, "carol")
            .with_user(4, "dave")
            .with_vote(2, 10, Classification::Constructive)
            .with_vote(3, 10, Classification::Vandalism)
            .with_vote(4, 10, Classification::Vandalism);
        let use_case = NextEditUseCase::new(Arc::new(store));

        let edit = use_case.execute(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(edit.id, EditId::new(10));
    }

    #[tokio::test]
    async fn test_none_when_everything_handled() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 10, 1)
            .with_edit(1, 20, 1)
            .with_user(1, "alice")
            .with_user(2, "bob")
            .with_vote(1, 10, Classification::Skip)
            .with_vote(2, 20, Classification::Constructive);
        let use_case = NextEditUseCase::new(Arc::new(store));

        assert!(use_case.execute(UserId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let use_case = NextEditUseCase::new(Arc::new(MockStore::new()));
        let err = use_case.execute(UserId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
