//! File logging. The terminal belongs to ratatui, so tracing output goes to
//! `<data dir>/cosmic-odyssey/cosmic-odyssey.log` unless a path is given.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cosmic_core::config::APP_DIR;

const LOG_FILE: &str = "cosmic-odyssey.log";
const DEFAULT_FILTER: &str = "info,cosmic_core=debug,cosmic_tui=debug";

/// Where the log goes when no `--log-file` is passed.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(LOG_FILE)
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}
