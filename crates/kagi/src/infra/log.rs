//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the app runs, so log output goes to a
//! file instead of stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "KAGI_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global `tracing` subscriber writing to `log_path`.
///
/// The filter is read from [`LOG_FILTER_ENV`] and defaults to `info`.
///
/// # Errors
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init(log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
