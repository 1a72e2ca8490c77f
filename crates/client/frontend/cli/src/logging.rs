//! File-only tracing setup; the terminal belongs to the UI.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "delve.log";

/// Installs the global subscriber writing to `<log dir>/delve.log`.
///
/// The filter defaults to `info` and honours `RUST_LOG`. Keep the returned
/// guard alive for the whole session or buffered lines are lost.
pub fn init(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = resolve_log_dir(log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(log_file = %log_dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}

/// Explicit directory first, then the platform cache dir, then the temp dir.
pub fn resolve_log_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    ProjectDirs::from("", "", "delve")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("delve").join("logs"))
}
