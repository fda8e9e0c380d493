//! Training source configuration from TOML (`[training]` section)

use reviewng_application::ReconcileParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw training-data source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrainingConfig {
    /// Base URL of the training-data API
    pub base_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Fetches allowed in flight during reconciliation
    pub max_concurrent_fetches: usize,
}

impl Default for FileTrainingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cluebotng.toolforge.org/api/".to_string(),
            user_agent: "ClueBot NG Review NG/1.0".to_string(),
            timeout_seconds: 30,
            max_concurrent_fetches: 4,
        }
    }
}

impl FileTrainingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_reconcile_params(&self) -> ReconcileParams {
        ReconcileParams::default()
            .with_fetch_timeout(self.timeout())
            .with_max_concurrent_fetches(self.max_concurrent_fetches)
    }
}
