//! Export use case
//!
//! Builds data dumps of the review state and collects cached training data
//! for downstream classifier training.

use super::shared::review_all;
use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use reviewng_domain::{
    DataDump, DumpEdit, DumpGroup, DumpScope, DumpUser, EditGroup, EditReview, TrainingData,
    UserId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for exporting review data
pub struct ExportDataUseCase {
    store: Arc<dyn ReviewStore>,
}

impl ExportDataUseCase {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Dump groups and edits.
    ///
    /// [`DumpScope::All`] fills `edits`, `reviewed` and `done` for every
    /// group and lists users. [`DumpScope::DoneOnly`] fills only `done`.
    pub async fn execute(&self, scope: DumpScope) -> Result<DataDump, ReviewError> {
        let users = self.store.list_users().await?;
        let usernames: HashMap<UserId, String> = users
            .iter()
            .map(|u| (u.id, u.username.clone()))
            .collect();

        let mut edit_groups = Vec::new();
        for (group, reviews) in review_all(self.store.as_ref()).await? {
            let mut dump = DumpGroup {
                id: group.id,
                name: group.name.clone(),
                weight: group.weight,
                edits: Vec::new(),
                reviewed: Vec::new(),
                done: Vec::new(),
            };

            for review in reviews {
                let edit = self.dump_edit(&group, &review, &usernames).await?;
                if !review.consensus().is_unknown() {
                    dump.done.push(edit.clone());
                }
                if scope == DumpScope::All {
                    if review.tally.sum() > 0 {
                        dump.reviewed.push(edit.clone());
                    }
                    dump.edits.push(edit);
                }
            }
            edit_groups.push(dump);
        }

        let users = match scope {
            DumpScope::All => {
                let mut dumped = Vec::with_capacity(users.len());
                for user in users {
                    let live = self.store.votes_by_user(user.id).await?.len();
                    dumped.push(DumpUser {
                        id: user.id,
                        nick: user.username.clone(),
                        classifications: user.total_classifications(live),
                    });
                }
                dumped
            }
            DumpScope::DoneOnly => Vec::new(),
        };

        info!(
            "Exported {} groups ({:?}), {} users",
            edit_groups.len(),
            scope,
            users.len()
        );

        Ok(DataDump { edit_groups, users })
    }

    /// Cached training data for every edit settled as constructive or
    /// vandalism, in group priority order. Edits still missing training data
    /// are left out.
    pub async fn trainer_export(&self) -> Result<Vec<TrainingData>, ReviewError> {
        let mut exported = Vec::new();
        let mut missing = 0usize;

        for (_, reviews) in review_all(self.store.as_ref()).await? {
            for review in reviews {
                if !review.consensus().is_scorable() {
                    continue;
                }
                match self.store.get_training_data(review.edit.id).await? {
                    Some(data) => exported.push(data),
                    None => missing += 1,
                }
            }
        }

        if missing > 0 {
            debug!("{} settled edits have no training data yet", missing);
        }
        Ok(exported)
    }

    async fn dump_edit(
        &self,
        group: &EditGroup,
        review: &EditReview,
        usernames: &HashMap<UserId, String>,
    ) -> Result<DumpEdit, ReviewError> {
        let votes = self.store.votes_for_edit(review.edit.id).await?;

        let comments = votes
            .iter()
            .filter(|v| !v.comment.trim().is_empty())
            .map(|v| v.comment.clone())
            .collect();
        let users = votes
            .iter()
            .filter_map(|v| usernames.get(&v.user_id).cloned())
            .collect();

        Ok(DumpEdit {
            id: review.edit.id,
            weight: group.weight,
            required: review.edit.required,
            constructive: review.tally.constructive,
            skipped: review.tally.skip,
            vandalism: review.tally.vandalism,
            original_classification: review.edit.classification.code().to_string(),
            real_classification: review.consensus().code().to_string(),
            comments,
            users,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockStore;
    use reviewng_domain::{Classification, EditId};

    fn store() -> MockStore {
        MockStore::new()
            .with_group(1, "Main", 3)
            .with_edit(1, 10, 2)
            .with_edit(1, 20, 2)
            .with_edit(1, 30, 2)
            .with_user(1, "alice")
            .with_legacy_user(2, "bob", 7)
            .with_comment_vote(1, 10, Classification::Vandalism, "page blanking")
            .with_comment_vote(2, 10, Classification::Vandalism, "  ")
            .with_vote(1, 20, Classification::Constructive)
    }

    #[tokio::test]
    async fn test_full_dump() {
        let use_case = ExportDataUseCase::new(Arc::new(store()));
        let dump = use_case.execute(DumpScope::All).await.unwrap();

        assert_eq!(dump.edit_groups.len(), 1);
        let group = &dump.edit_groups[0];
        assert_eq!(group.edits.len(), 3);
        assert_eq!(group.reviewed.len(), 2);
        assert_eq!(group.done.len(), 1);

        let done = &group.done[0];
        assert_eq!(done.id, EditId::new(10));
        assert_eq!(done.weight, 3);
        assert_eq!(done.vandalism, 2);
        assert_eq!(done.original_classification, "U");
        assert_eq!(done.real_classification, "V");
        assert_eq!(done.comments, vec!["page blanking".to_string()]);
        assert_eq!(done.users, vec!["alice".to_string(), "bob".to_string()]);

        let bob = dump.users.iter().find(|u| u.nick == "bob").unwrap();
        assert_eq!(bob.classifications, 8);
    }

    #[tokio::test]
    async fn test_done_only_dump() {
        let use_case = ExportDataUseCase::new(Arc::new(store()));
        let dump = use_case.execute(DumpScope::DoneOnly).await.unwrap();

        let group = &dump.edit_groups[0];
        assert!(group.edits.is_empty());
        assert!(group.reviewed.is_empty());
        assert_eq!(group.done.len(), 1);
        assert!(dump.users.is_empty());
    }

    #[tokio::test]
    async fn test_trainer_export_only_scorable_with_data() {
        let store = store()
            .with_edit(1, 40, 1)
            .with_vote(1, 40, Classification::Skip)
            .with_training_data(10)
            .with_training_data(40);
        let use_case = ExportDataUseCase::new(Arc::new(store));

        let exported = use_case.trainer_export().await.unwrap();
        let ids: Vec<_> = exported.iter().map(|d| d.edit_id).collect();
        assert_eq!(ids, vec![EditId::new(10)]);
    }
}
