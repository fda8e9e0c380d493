//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters
//! by the binary.

mod logging;
mod report;
mod store;
mod training;

pub use logging::FileLoggingConfig;
pub use report::FileReportConfig;
pub use store::FileStoreConfig;
pub use training::FileTrainingConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("training.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("training.max_concurrent_fetches cannot be 0")]
    InvalidConcurrency,

    #[error("{0} cannot be empty")]
    EmptyUrl(&'static str),

    #[error("report.group_name cannot be empty")]
    EmptyGroupName,

    #[error("report.default_required must be at least 1")]
    InvalidRequired,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Review store settings
    pub store: FileStoreConfig,
    /// Training-data source settings
    pub training: FileTrainingConfig,
    /// Report import settings
    pub report: FileReportConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.training.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.training.max_concurrent_fetches == 0 {
            issues.push(ConfigValidationError::InvalidConcurrency);
        }
        if self.training.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyUrl("training.base_url"));
        }
        if self.report.url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyUrl("report.url"));
        }
        if self.report.group_name.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyGroupName);
        }
        if self.report.default_required == 0 {
            issues.push(ConfigValidationError::InvalidRequired);
        }

        issues
    }
}
