//! In-memory review store with optional JSON snapshot persistence
//!
//! All state lives behind one async mutex. When a snapshot path is set, the
//! store holds an exclusive [`SnapshotLock`] from before the snapshot is read
//! until it is dropped, and every mutation rewrites the snapshot before the
//! mutex is released. A mutation whose snapshot write fails is undone in
//! memory as well.

use super::lock::SnapshotLock;
use async_trait::async_trait;
use reviewng_application::{ReviewStore, StoreError};
use reviewng_domain::{
    Edit, EditGroup, EditId, GroupId, NewVote, TrainingData, User, UserClassification, UserId,
    VoteId,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEdit {
    #[serde(flatten)]
    edit: Edit,
    group_id: GroupId,
}

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Snapshot {
    groups: Vec<EditGroup>,
    edits: Vec<StoredEdit>,
    users: Vec<User>,
    votes: Vec<UserClassification>,
    training_data: Vec<TrainingData>,
}

#[derive(Debug, Default)]
struct State {
    groups: BTreeMap<GroupId, EditGroup>,
    edits: BTreeMap<EditId, StoredEdit>,
    users: BTreeMap<UserId, User>,
    votes: Vec<UserClassification>,
    training: BTreeMap<EditId, TrainingData>,
}

impl State {
    fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let mut state = State {
            groups: snapshot.groups.into_iter().map(|g| (g.id, g)).collect(),
            users: snapshot.users.into_iter().map(|u| (u.id, u)).collect(),
            votes: snapshot.votes,
            training: snapshot
                .training_data
                .into_iter()
                .map(|t| (t.edit_id, t))
                .collect(),
            ..Default::default()
        };

        for stored in snapshot.edits {
            if !state.groups.contains_key(&stored.group_id) {
                return Err(StoreError::Corrupt(format!(
                    "edit {} belongs to unknown group {}",
                    stored.edit.id, stored.group_id
                )));
            }
            state.edits.insert(stored.edit.id, stored);
        }

        let mut pairs = HashSet::new();
        for vote in &state.votes {
            if !pairs.insert((vote.user_id, vote.edit_id)) {
                return Err(StoreError::Corrupt(format!(
                    "user {} has more than one vote on edit {}",
                    vote.user_id, vote.edit_id
                )));
            }
        }

        Ok(state)
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            groups: self.groups.values().cloned().collect(),
            edits: self.edits.values().cloned().collect(),
            users: self.users.values().cloned().collect(),
            votes: self.votes.clone(),
            training_data: self.training.values().cloned().collect(),
        }
    }

    fn next_vote_id(&self) -> VoteId {
        VoteId::new(self.votes.iter().map(|v| v.id.get()).max().unwrap_or(0) + 1)
    }
}

/// Review store kept in memory, optionally persisted to a JSON file
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    state: Mutex<State>,
    snapshot_path: Option<PathBuf>,
    _lock: Option<SnapshotLock>,
}

impl InMemoryReviewStore {
    /// Empty store that is never persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a snapshot-backed store. A missing file starts an empty store
    /// that will be created on the first write.
    ///
    /// Waits while another store (in this or any other process) has the same
    /// snapshot open.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let lock = SnapshotLock::acquire(&path).await?;
        debug!("Holding {}", lock.path().display());

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(|e| {
                    StoreError::Corrupt(format!("{}: {}", path.display(), e))
                })?;
                let state = State::from_snapshot(snapshot)?;
                info!(
                    "Loaded review store from {} ({} edits, {} votes)",
                    path.display(),
                    state.edits.len(),
                    state.votes.len()
                );
                state
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting empty", path.display());
                State::default()
            }
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            state: Mutex::new(state),
            snapshot_path: Some(path),
            _lock: Some(lock),
        })
    }

    /// Add an edit group
    pub async fn create_group(
        &self,
        name: impl Into<String>,
        weight: i32,
    ) -> Result<GroupId, StoreError> {
        let mut state = self.state.lock().await;
        let id = GroupId::new(state.groups.keys().map(|g| g.get()).max().unwrap_or(0) + 1);
        state.groups.insert(id, EditGroup::new(id, name, weight));
        if let Err(e) = self.persist(&state).await {
            state.groups.remove(&id);
            return Err(e);
        }
        Ok(id)
    }

    /// Add or replace a user
    pub async fn upsert_user(&self, user: User) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let id = user.id;
        let previous = state.users.insert(id, user);
        if let Err(e) = self.persist(&state).await {
            restore(&mut state.users, id, previous);
            return Err(e);
        }
        Ok(())
    }

    async fn persist(&self, state: &State) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let data = serde_json::to_vec_pretty(&state.to_snapshot())
            .map_err(|e| StoreError::Backend(format!("failed to encode snapshot: {e}")))?;
        atomic_write(path, &data)
            .await
            .map_err(|e| StoreError::Backend(format!("failed to write {}: {}", path.display(), e)))
    }
}

/// Put `key` back to `previous`, removing it if it was absent
fn restore<K: Ord, V>(map: &mut BTreeMap<K, V>, key: K, previous: Option<V>) {
    match previous {
        Some(value) => {
            map.insert(key, value);
        }
        None => {
            map.remove(&key);
        }
    }
}

/// Write to a sibling temp file, then rename over the target
async fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, data).await?;
    tokio::fs::rename(&tmp, path).await
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn get_edit(&self, id: EditId) -> Result<Option<Edit>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.edits.get(&id).map(|s| s.edit.clone()))
    }

    async fn list_edit_ids(&self) -> Result<HashSet<EditId>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.edits.keys().copied().collect())
    }

    async fn create_edit(&self, edit: Edit, group: GroupId) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.groups.contains_key(&group) {
            return Err(StoreError::MissingReference(format!("edit group {group}")));
        }
        let id = edit.id;
        let previous = state.edits.insert(
            id,
            StoredEdit {
                edit,
                group_id: group,
            },
        );
        if let Err(e) = self.persist(&state).await {
            restore(&mut state.edits, id, previous);
            return Err(e);
        }
        Ok(())
    }

    async fn list_groups(&self) -> Result<Vec<EditGroup>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.groups.values().cloned().collect())
    }

    async fn find_group_by_name(&self, name: &str) -> Result<Option<EditGroup>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.groups.values().find(|g| g.name == name).cloned())
    }

    async fn list_edits_by_group(&self, group: GroupId) -> Result<Vec<Edit>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .edits
            .values()
            .filter(|s| s.group_id == group)
            .map(|s| s.edit.clone())
            .collect())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn votes_for_edit(&self, edit: EditId) -> Result<Vec<UserClassification>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .votes
            .iter()
            .filter(|v| v.edit_id == edit)
            .cloned()
            .collect())
    }

    async fn votes_by_user(&self, user: UserId) -> Result<Vec<UserClassification>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .votes
            .iter()
            .filter(|v| v.user_id == user)
            .cloned()
            .collect())
    }

    async fn insert_vote(&self, vote: NewVote) -> Result<VoteId, StoreError> {
        let mut state = self.state.lock().await;
        if !state.edits.contains_key(&vote.edit_id) {
            return Err(StoreError::MissingReference(format!("edit {}", vote.edit_id)));
        }
        if !state.users.contains_key(&vote.user_id) {
            return Err(StoreError::MissingReference(format!("user {}", vote.user_id)));
        }

        let id = state.next_vote_id();
        state.votes.push(vote.into_recorded(id));
        if let Err(e) = self.persist(&state).await {
            state.votes.pop();
            return Err(e);
        }
        Ok(id)
    }

    async fn get_training_data(&self, edit: EditId) -> Result<Option<TrainingData>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.training.get(&edit).cloned())
    }

    async fn put_training_data(&self, data: TrainingData) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let id = data.edit_id;
        let previous = state.training.insert(id, data);
        if let Err(e) = self.persist(&state).await {
            restore(&mut state.training, id, previous);
            return Err(e);
        }
        Ok(())
    }

    async fn list_training_data_ids(&self) -> Result<HashSet<EditId>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.training.keys().copied().collect())
    }
}
