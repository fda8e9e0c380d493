//! Store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path of the JSON snapshot. Falls back to the user data directory.
    pub path: Option<PathBuf>,
}

impl FileStoreConfig {
    /// Resolved snapshot location, `None` when no data directory is known
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("reviewng").join("store.json")))
    }
}
