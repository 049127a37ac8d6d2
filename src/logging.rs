//! # Logging
//!
//! The terminal belongs to the TUI, so log events are written as JSON lines
//! to a file in the platform data directory instead of stderr:
//!
//! ```text
//! ~/.local/share/listgroup/listgroup.log
//! ```
//!
//! The filter is read from `LISTGROUP_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `listgroup=info`.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "LISTGROUP_LOG";
const DEFAULT_DIRECTIVE: &str = "listgroup=info";

/// Default location of the log file.
pub fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "listgroup")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("listgroup.log"))
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `path`.
///
/// Returns an error if the file cannot be opened or a subscriber is already set.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter())
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
