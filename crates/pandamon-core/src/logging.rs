//! Tracing setup.
//!
//! Logs go to a daily-rolling file under ${PANDAMON_HOME}/logs, never to
//! stdout (the TUI owns the terminal). Filtering is controlled by the
//! PANDAMON_LOG environment variable; when it is unset or empty, logging is
//! disabled entirely and no log directory is created.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes file logging if PANDAMON_LOG is set.
///
/// Returns the appender guard; the caller must keep it alive for the
/// duration of the program or buffered lines are dropped.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Ok(raw) = std::env::var("PANDAMON_LOG") else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "pandamon.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(raw))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
