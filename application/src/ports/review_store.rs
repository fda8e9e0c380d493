//! Review store port
//!
//! Defines the interface to the durable store holding edits, groups, users,
//! votes and cached training data. The relational implementation lives
//! outside this workspace; adapters implement this trait.

use async_trait::async_trait;
use reviewng_domain::{
    Edit, EditGroup, EditId, GroupId, NewVote, TrainingData, User, UserClassification, UserId,
    VoteId,
};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by a review store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Referenced record does not exist: {0}")]
    MissingReference(String),
}

/// Durable storage used by the use cases.
///
/// Individual calls are expected to be atomic; the store gives no guarantees
/// across calls. In particular it does not enforce one vote per
/// (user, edit) pair, which is the job of the vote submission use case.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    // ==================== Edits & Groups ====================

    async fn get_edit(&self, id: EditId) -> Result<Option<Edit>, StoreError>;

    /// Ids of every edit in the store
    async fn list_edit_ids(&self) -> Result<HashSet<EditId>, StoreError>;

    /// Create an edit as a member of `group`
    async fn create_edit(&self, edit: Edit, group: GroupId) -> Result<(), StoreError>;

    async fn list_groups(&self) -> Result<Vec<EditGroup>, StoreError>;

    async fn find_group_by_name(&self, name: &str) -> Result<Option<EditGroup>, StoreError>;

    async fn list_edits_by_group(&self, group: GroupId) -> Result<Vec<Edit>, StoreError>;

    // ==================== Users ====================

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    // ==================== Votes ====================

    async fn votes_for_edit(&self, edit: EditId) -> Result<Vec<UserClassification>, StoreError>;

    async fn votes_by_user(&self, user: UserId) -> Result<Vec<UserClassification>, StoreError>;

    /// Append a vote and return its id
    async fn insert_vote(&self, vote: NewVote) -> Result<VoteId, StoreError>;

    // ==================== Training data ====================

    async fn get_training_data(&self, edit: EditId) -> Result<Option<TrainingData>, StoreError>;

    /// Store training data, replacing any existing entry for the edit
    async fn put_training_data(&self, data: TrainingData) -> Result<(), StoreError>;

    async fn list_training_data_ids(&self) -> Result<HashSet<EditId>, StoreError>;
}
