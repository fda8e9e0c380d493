//! Use case parameters.
//!
//! These are application-layer concerns filled in from the configuration
//! file by the binary.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for training-data reconciliation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileParams {
    /// Upper bound on a single upstream fetch
    pub fetch_timeout: Duration,
    /// Number of fetches allowed in flight at once
    pub max_concurrent_fetches: usize,
}

impl Default for ReconcileParams {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(30),
            max_concurrent_fetches: 4,
        }
    }
}

impl ReconcileParams {
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }
}

/// Parameters for importing reported revisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportParams {
    /// Name of the group that receives imported edits
    pub group_name: String,
    /// `required` assigned to imported edits
    pub default_required: u32,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            group_name: "Report Interface Import".to_string(),
            default_required: 2,
        }
    }
}

impl ImportParams {
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }

    pub fn with_default_required(mut self, required: u32) -> Self {
        self.default_required = required;
        self
    }
}
