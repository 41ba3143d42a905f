//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! config directory. Headless commands log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Name of the log file written by interactive sessions.
pub const LOG_FILE_NAME: &str = "mapcolor.log";

/// Builds the filter: `RUST_LOG` wins over the configured level.
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Default log file location.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(LOG_FILE_NAME))
}

/// Sends logs to `path`, truncating it.
pub fn init_file_logging(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Sends logs to stderr.
pub fn init_stderr_logging(default_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
