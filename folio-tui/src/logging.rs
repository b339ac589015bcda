//! File logging. The terminal belongs to the dashboard, so tracing output
//! goes to `<directory>/folio-tui.log` instead of stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "folio-tui.log";

/// Install the global subscriber, filtered by `RUST_LOG` when set and by
/// `level` otherwise. Keep the guard alive until exit or buffered lines are
/// lost.
pub fn init(directory: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("creating log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).context("building log filter")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(guard)
}
