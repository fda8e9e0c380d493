//! Infrastructure layer for reviewng
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;
pub mod upstream;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileReportConfig,
    FileStoreConfig, FileTrainingConfig,
};
pub use storage::InMemoryReviewStore;
pub use upstream::{DEFAULT_USER_AGENT, HttpReportSource, HttpTrainingSource};
