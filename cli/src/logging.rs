//! Tracing setup for the binary.
//!
//! Console logs go to stderr so JSON output on stdout stays clean. When a
//! log directory is configured, a daily-rolling file is written as well.

use std::path::Path;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "reviewng.log";

fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Install the global subscriber. The returned guard must be held until
/// exit so buffered file output is flushed.
pub fn init(verbose: u8, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let Some(dir) = log_dir else {
        Registry::default()
            .with(filter_for(verbose))
            .with(console)
            .try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
    let file = fmt::layer().with_ansi(false).with_writer(writer);

    Registry::default()
        .with(filter_for(verbose))
        .with(console)
        .with(file)
        .try_init()?;

    tracing::debug!("Writing logs to {}", dir.display());
    Ok(Some(guard))
}
