//! Configuration file loading for reviewng
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./reviewng.toml` or `./.reviewng.toml`
//! 3. Global: `$XDG_CONFIG_HOME/reviewng/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileReportConfig, FileStoreConfig,
    FileTrainingConfig,
};
pub use loader::ConfigLoader;
