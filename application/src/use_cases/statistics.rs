//! Statistics use case
//!
//! Read-only roll-up of group completion and reviewer accuracy. Safe to
//! recompute on every request.

use super::shared::{review_all, review_edit};
use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use reviewng_domain::{
    Classification, EditGroupStat, EditId, EditStatus, StatisticsReport, User, UserAccuracy,
    UserContributionStat, UserId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Use case for building statistics reports
pub struct StatisticsUseCase {
    store: Arc<dyn ReviewStore>,
}

impl StatisticsUseCase {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<StatisticsReport, ReviewError> {
        let mut groups = Vec::new();
        let mut consensus: HashMap<EditId, Classification> = HashMap::new();

        for (group, reviews) in review_all(self.store.as_ref()).await? {
            let mut stat = EditGroupStat {
                name: group.name.clone(),
                weight: group.weight,
                ..Default::default()
            };
            for review in &reviews {
                match review.status() {
                    EditStatus::NotStarted => stat.not_started += 1,
                    EditStatus::Partial => stat.partial += 1,
                    EditStatus::Done => stat.done += 1,
                }
                consensus.insert(review.edit.id, review.consensus());
            }
            groups.push(stat);
        }
        groups.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.name.cmp(&b.name)));

        let mut users = Vec::new();
        for user in self.store.list_users().await? {
            users.push(self.contribution(&user, &consensus).await?);
        }
        users.sort_by(|a, b| a.username.cmp(&b.username));

        debug!(
            "Built statistics for {} groups and {} users",
            groups.len(),
            users.len()
        );

        Ok(StatisticsReport { groups, users })
    }

    /// Accuracy of a single reviewer
    pub async fn user_accuracy(&self, user_id: UserId) -> Result<UserAccuracy, ReviewError> {
        if self.store.get_user(user_id).await?.is_none() {
            return Err(ReviewError::user_not_found(user_id));
        }

        let mut cache = HashMap::new();
        let mut accuracy = UserAccuracy::default();
        for vote in self.store.votes_by_user(user_id).await? {
            let settled = self.consensus_of(vote.edit_id, &mut cache).await?;
            if settled.is_scorable() {
                accuracy.record(vote.classification == settled);
            }
        }
        Ok(accuracy)
    }

    async fn contribution(
        &self,
        user: &User,
        consensus: &HashMap<EditId, Classification>,
    ) -> Result<UserContributionStat, ReviewError> {
        let votes = self.store.votes_by_user(user.id).await?;

        let mut accuracy = UserAccuracy::default();
        for vote in &votes {
            let settled = consensus
                .get(&vote.edit_id)
                .copied()
                .unwrap_or(Classification::Unknown);
            if settled.is_scorable() {
                accuracy.record(vote.classification == settled);
            }
        }

        Ok(UserContributionStat {
            username: user.username.clone(),
            admin: user.admin,
            edit_count: user.total_classifications(votes.len()),
            accuracy_count: accuracy.scored,
            accuracy_percentage: accuracy.percentage(),
        })
    }

    async fn consensus_of(
        &self,
        edit_id: EditId,
        cache: &mut HashMap<EditId, Classification>,
    ) -> Result<Classification, ReviewError> {
        if let Some(c) = cache.get(&edit_id) {
            return Ok(*c);
        }
        let classification = match self.store.get_edit(edit_id).await? {
            Some(edit) => review_edit(self.store.as_ref(), edit).await?.consensus(),
            None => Classification::Unknown,
        };
        cache.insert(edit_id, classification);
        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::MockStore;

    /// alice votes on four settled non-skip edits and gets three right.
    /// The same user also votes on a skip-settled edit and a pending one, which are
    /// not scored.
    fn scenario() -> MockStore {
        MockStore::new()
            .with_group(1, "Main", 5)
            .with_group(2, "Archive", 1)
            .with_edit(1, 1, 2)
            .with_edit(1, 2, 2)
            .with_edit(1, 3, 2)
            .with_edit(1, 4, 2)
            .with_edit(1, 5, 2)
            .with_edit(2, 6, 2)
            .with_edit(2, 7, 2)
            .with_user(1, "alice")
            .with_user(2, "bob")
            .with_legacy_user(3, "carol", 40)
            .with_user(4, "dave")
            .with_vote(1, 1, Classification::Vandalism)
            .with_vote(2, 1, Classification::Vandalism)
            .with_vote(1, 2, Classification::Constructive)
            .with_vote(2, 2, Classification::Constructive)
            .with_vote(1, 3, Classification::Vandalism)
            .with_vote(2, 3, Classification::Vandalism)
            .with_vote(1, 4, Classification::Constructive)
            .with_vote(2, 4, Classification::Vandalism)
            .with_vote(3, 4, Classification::Vandalism)
            .with_vote(4, 4, Classification::Vandalism)
            .with_vote(1, 5, Classification::Skip)
            .with_vote(2, 5, Classification::Skip)
            .with_vote(1, 6, Classification::Vandalism)
    }

    fn user<'a>(report: &'a StatisticsReport, name: &str) -> &'a UserContributionStat {
        report.users.iter().find(|u| u.username == name).unwrap()
    }

    #[tokio::test]
    async fn test_accuracy_three_of_four() {
        let use_case = StatisticsUseCase::new(Arc::new(scenario()));
        let report = use_case.execute().await.unwrap();

        let alice = user(&report, "alice");
        assert_eq!(alice.edit_count, 6);
        assert_eq!(alice.accuracy_count, 4);
        assert_eq!(alice.accuracy_percentage, Some(75.0));
    }

    #[tokio::test]
    async fn test_legacy_count_added_to_edit_count() {
        let use_case = StatisticsUseCase::new(Arc::new(scenario()));
        let report = use_case.execute().await.unwrap();

        let carol = user(&report, "carol");
        assert_eq!(carol.edit_count, 41);
        assert_eq!(carol.accuracy_percentage, Some(100.0));
    }

    #[tokio::test]
    async fn test_no_scorable_votes_has_no_percentage() {
        let store = MockStore::new()
            .with_group(1, "Main", 0)
            .with_edit(1, 1, 2)
            .with_user(1, "erin")
            .with_vote(1, 1, Classification::Vandalism);
        let use_case = StatisticsUseCase::new(Arc::new(store));
        let report = use_case.execute().await.unwrap();

        let erin = user(&report, "erin");
        assert_eq!(erin.accuracy_count, 0);
        assert_eq!(erin.accuracy_percentage, None);
    }

    #[tokio::test]
    async fn test_group_buckets_sorted_by_weight() {
        let use_case = StatisticsUseCase::new(Arc::new(scenario()));
        let report = use_case.execute().await.unwrap();

        let names: Vec<_> = report.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Archive", "Main"]);

        let archive = &report.groups[0];
        assert_eq!((archive.not_started, archive.partial, archive.done), (1, 1, 0));

        let main = &report.groups[1];
        assert_eq!((main.not_started, main.partial, main.done), (0, 0, 5));
        assert_eq!(main.total(), 5);
    }

    #[tokio::test]
    async fn test_users_sorted_by_name() {
        let use_case = StatisticsUseCase::new(Arc::new(scenario()));
        let report = use_case.execute().await.unwrap();

        let names: Vec<_> = report.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol", "dave"]);
    }

    #[tokio::test]
    async fn test_single_user_accuracy_matches_report() {
        let use_case = StatisticsUseCase::new(Arc::new(scenario()));

        let accuracy = use_case.user_accuracy(UserId::new(1)).await.unwrap();
        assert_eq!(accuracy.scored, 4);
        assert_eq!(accuracy.correct, 3);

        let err = use_case.user_accuracy(UserId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
