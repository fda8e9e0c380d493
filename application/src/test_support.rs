//! Test doubles shared by the use case tests.

use crate::ports::review_store::{ReviewStore, StoreError};
use crate::ports::upstream::{ReportSource, SourceError, TrainingDataSource};
use async_trait::async_trait;
use reviewng_domain::{
    Classification, Edit, EditGroup, EditId, GroupId, NewVote, TrainingData, TrainingPayload,
    User, UserClassification, UserId, VoteId,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
struct State {
    groups: Vec<EditGroup>,
    edits: BTreeMap<EditId, (Edit, GroupId)>,
    users: Vec<User>,
    votes: Vec<UserClassification>,
    training: HashMap<EditId, TrainingData>,
}

/// Mutex-backed store
#[derive(Default)]
pub struct MockStore {
    state: Mutex<State>,
    pub insert_delay: Option<Duration>,
    pub fail_training_writes: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(self, id: u64, name: &str, weight: i32) -> Self {
        self.state
            .lock()
            .unwrap()
            .groups
            .push(EditGroup::new(GroupId::new(id), name, weight));
        self
    }

    pub fn with_edit(self, group: u64, id: u64, required: u32) -> Self {
        let edit = Edit::new(EditId::new(id), required, Classification::Unknown).unwrap();
        self.state
            .lock()
            .unwrap()
            .edits
            .insert(edit.id, (edit, GroupId::new(group)));
        self
    }

    pub fn with_user(self, id: u64, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .push(User::new(UserId::new(id), name).approved());
        self
    }

    pub fn with_legacy_user(self, id: u64, name: &str, legacy: u32) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .push(User::new(UserId::new(id), name).with_legacy_count(legacy));
        self
    }

    /// Record a vote directly, bypassing the submission use case
    pub fn with_vote(self, user: u64, edit: u64, classification: Classification) -> Self {
        self.push_vote(user, edit, classification, "");
        self
    }

    pub fn with_comment_vote(
        self,
        user: u64,
        edit: u64,
        classification: Classification,
        comment: &str,
    ) -> Self {
        self.push_vote(user, edit, classification, comment);
        self
    }

    pub fn with_training_data(self, edit: u64) -> Self {
        let data = TrainingData::new(EditId::new(edit), payload(edit), false);
        self.state
            .lock()
            .unwrap()
            .training
            .insert(data.edit_id, data);
        self
    }

    fn push_vote(&self, user: u64, edit: u64, classification: Classification, comment: &str) {
        let mut state = self.state.lock().unwrap();
        let id = VoteId::new(state.votes.len() as u64 + 1);
        state.votes.push(UserClassification {
            id,
            user_id: UserId::new(user),
            edit_id: EditId::new(edit),
            classification,
            comment: comment.to_string(),
        });
    }

    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.insert_delay = Some(delay);
        self
    }

    pub fn failing_training_writes(mut self) -> Self {
        self.fail_training_writes = true;
        self
    }

    pub fn vote_count(&self) -> usize {
        self.state.lock().unwrap().votes.len()
    }

    pub fn training_data(&self, edit: u64) -> Option<TrainingData> {
        self.state
            .lock()
            .unwrap()
            .training
            .get(&EditId::new(edit))
            .cloned()
    }

    pub fn edit_group(&self, edit: u64) -> Option<GroupId> {
        self.state
            .lock()
            .unwrap()
            .edits
            .get(&EditId::new(edit))
            .map(|(_, g)| *g)
    }
}

#[async_trait]
impl ReviewStore for MockStore {
    async fn get_edit(&self, id: EditId) -> Result<Option<Edit>, StoreError> {
        Ok(self.state.lock().unwrap().edits.get(&id).map(|(e, _)| e.clone()))
    }

    async fn list_edit_ids(&self) -> Result<HashSet<EditId>, StoreError> {
        Ok(self.state.lock().unwrap().edits.keys().copied().collect())
    }

    async fn create_edit(&self, edit: Edit, group: GroupId) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .edits
            .insert(edit.id, (edit, group));
        Ok(())
    }

    async fn list_groups(&self) -> Result<Vec<EditGroup>, StoreError> {
        Ok(self.state.lock().unwrap().groups.clone())
    }

    async fn find_group_by_name(&self, name: &str) -> Result<Option<EditGroup>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .groups
            .iter()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn list_edits_by_group(&self, group: GroupId) -> Result<Vec<Edit>, StoreError> {
        // Reverse insertion order so callers cannot rely on store ordering
        Ok(self
            .state
            .lock()
            .unwrap()
            .edits
            .values()
            .rev()
            .filter(|(_, g)| *g == group)
            .map(|(e, _)| e.clone())
            .collect())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn votes_for_edit(&self, edit: EditId) -> Result<Vec<UserClassification>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .iter()
            .filter(|v| v.edit_id == edit)
            .cloned()
            .collect())
    }

    async fn votes_by_user(&self, user: UserId) -> Result<Vec<UserClassification>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .votes
            .iter()
            .filter(|v| v.user_id == user)
            .cloned()
            .collect())
    }

    async fn insert_vote(&self, vote: NewVote) -> Result<VoteId, StoreError> {
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.state.lock().unwrap();
        let id = VoteId::new(state.votes.len() as u64 + 1);
        state.votes.push(vote.into_recorded(id));
        Ok(id)
    }

    async fn get_training_data(&self, edit: EditId) -> Result<Option<TrainingData>, StoreError> {
        Ok(self.state.lock().unwrap().training.get(&edit).cloned())
    }

    async fn put_training_data(&self, data: TrainingData) -> Result<(), StoreError> {
        if self.fail_training_writes {
            return Err(StoreError::Backend("write rejected".to_string()));
        }
        self.state
            .lock()
            .unwrap()
            .training
            .insert(data.edit_id, data);
        Ok(())
    }

    async fn list_training_data_ids(&self) -> Result<HashSet<EditId>, StoreError> {
        Ok(self.state.lock().unwrap().training.keys().copied().collect())
    }
}

pub fn payload(edit: u64) -> TrainingPayload {
    serde_json::from_value(serde_json::json!({
        "current": {"id": edit},
        "page": {"title": format!("Page {edit}")}
    }))
    .unwrap()
}

/// Training source that counts calls and fails for selected edits
#[derive(Default)]
pub struct MockTrainingSource {
    pub calls: AtomicUsize,
    pub failing: HashSet<EditId>,
    pub delay: Option<Duration>,
}

impl MockTrainingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, edit: u64) -> Self {
        self.failing.insert(EditId::new(edit));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrainingDataSource for MockTrainingSource {
    async fn fetch(&self, edit: EditId) -> Result<TrainingPayload, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&edit) {
            return Err(SourceError::Status(503));
        }
        Ok(payload(edit.get()))
    }
}

/// Report source returning a fixed body
pub struct MockReportSource {
    pub body: Result<String, SourceError>,
}

#[async_trait]
impl ReportSource for MockReportSource {
    async fn fetch_reported(&self) -> Result<String, SourceError> {
        self.body.clone()
    }
}
