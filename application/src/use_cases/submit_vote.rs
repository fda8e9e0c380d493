//! Submit vote use case
//!
//! Records a reviewer's vote on an edit, unless the vote would contradict the
//! edit's settled classification. In that case the vote is held back until
//! the reviewer confirms it.
//!
//! # Flow
//!
//! 1. Claim the (user, edit) pair so a concurrent submission for the same pair
//!    is rejected instead of racing
//! 2. Load the edit and its existing votes
//! 3. Reject the vote if the user already voted on this edit
//! 4. Compute the settled classification from existing votes only
//! 5. If settled, different from the proposal and not confirmed, return
//!    [`SubmitVoteOutcome::RequiresConfirmation`] without recording anything
//! 6. Otherwise append the vote

use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use reviewng_domain::{
    Classification, EditId, NewVote, UserId, VoteId, calculate_classification, tally_votes,
};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Input for the SubmitVote use case
#[derive(Debug, Clone)]
pub struct SubmitVoteInput {
    pub user_id: UserId,
    pub edit_id: EditId,
    pub classification: Classification,
    pub comment: String,
    /// Set when the reviewer already confirmed a contradicting vote
    pub confirmed: bool,
}

impl SubmitVoteInput {
    pub fn new(user_id: UserId, edit_id: EditId, classification: Classification) -> Self {
        Self {
            user_id,
            edit_id,
            classification,
            comment: String::new(),
            confirmed: false,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }
}

/// Result of a vote submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitVoteOutcome {
    /// The vote was recorded
    Accepted { vote_id: VoteId },
    /// Nothing was recorded; the edit is already settled as `current`
    RequiresConfirmation { current: Classification },
}

impl SubmitVoteOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitVoteOutcome::Accepted { .. })
    }
}

/// Use case for submitting a vote
pub struct SubmitVoteUseCase {
    store: Arc<dyn ReviewStore>,
    in_flight: Mutex<HashSet<(UserId, EditId)>>,
}

impl SubmitVoteUseCase {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self {
            store,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Submit a vote.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::NotFound`] - the edit or user does not exist
    /// - [`ReviewError::Conflict`] - the user already voted on this edit, or
    ///   another submission for the same pair is in progress
    /// - [`ReviewError::Invalid`] - `Unknown` was submitted as a vote
    /// - [`ReviewError::Storage`] - the store failed
    pub async fn execute(&self, input: SubmitVoteInput) -> Result<SubmitVoteOutcome, ReviewError> {
        let vote = NewVote::new(
            input.user_id,
            input.edit_id,
            input.classification,
            input.comment,
        )?;

        let _claim = self.claim(vote.user_id, vote.edit_id)?;

        let edit = self
            .store
            .get_edit(vote.edit_id)
            .await?
            .ok_or_else(|| ReviewError::edit_not_found(vote.edit_id))?;

        if self.store.get_user(vote.user_id).await?.is_none() {
            return Err(ReviewError::user_not_found(vote.user_id));
        }

        let existing = self.store.votes_for_edit(edit.id).await?;
        if existing.iter().any(|v| v.user_id == vote.user_id) {
            return Err(ReviewError::Conflict(format!(
                "user {} already voted on edit {}",
                vote.user_id, edit.id
            )));
        }

        let current = calculate_classification(&tally_votes(&existing), edit.required);
        if !current.is_unknown() && current != vote.classification && !input.confirmed {
            debug!(
                "Vote {} on edit {} contradicts settled {}; asking for confirmation",
                vote.classification, edit.id, current
            );
            return Ok(SubmitVoteOutcome::RequiresConfirmation { current });
        }

        let vote_id = self.store.insert_vote(vote.clone()).await?;
        info!(
            "Recorded vote {} by user {} on edit {}: {}",
            vote_id, vote.user_id, vote.edit_id, vote.classification
        );

        Ok(SubmitVoteOutcome::Accepted { vote_id })
    }

    fn claim(&self, user: UserId, edit: EditId) -> Result<VoteClaim<'_>, ReviewError> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert((user, edit)) {
            return Err(ReviewError::Conflict(format!(
                "a vote by user {user} on edit {edit} is already being recorded"
            )));
        }
        Ok(VoteClaim {
            set: &self.in_flight,
            key: (user, edit),
        })
    }
}

/// Releases a (user, edit) claim when dropped
struct VoteClaim<'a> {
    set: &'a Mutex<HashSet<(UserId, EditId)>>,
    key: (UserId, EditId),
}

impl Drop for VoteClaim<'_> {
    fn drop(&mut self) {
        let mut set = self.set.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.key);
    }
}
