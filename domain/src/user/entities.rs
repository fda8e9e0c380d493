//! Reviewer accounts and accuracy

use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};

/// A reviewer account.
///
/// `legacy_count` carries classifications made in the previous review
/// interface. It only feeds display totals, never accuracy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub approved: bool,
    pub admin: bool,
    #[serde(default)]
    pub legacy_count: u32,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            approved: false,
            admin: false,
            legacy_count: 0,
        }
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_legacy_count(mut self, count: u32) -> Self {
        self.legacy_count = count;
        self
    }

    /// Display total: live votes plus carried-over legacy classifications
    pub fn total_classifications(&self, live_votes: usize) -> u64 {
        live_votes as u64 + u64::from(self.legacy_count)
    }
}

/// How often a reviewer agreed with the settled consensus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccuracy {
    /// Votes on edits settled as constructive or vandalism
    pub scored: u32,
    /// Of those, votes matching the settled classification
    pub correct: u32,
}

impl UserAccuracy {
    pub fn record(&mut self, correct: bool) {
        self.scored += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Accuracy as a percentage, `None` when nothing has been scored
    pub fn percentage(&self) -> Option<f64> {
        if self.scored == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.scored) * 100.0)
        }
    }
}
