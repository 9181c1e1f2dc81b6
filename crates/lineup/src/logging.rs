//! Debug logging to a state-directory file.
//!
//! The TUI owns stdout and stderr, so log output goes to
//! `~/.local/state/lineup/lineup.log` instead. Logging is off unless the
//! `LINEUP_LOG` environment variable holds a tracing filter
//! (e.g. `LINEUP_LOG=debug` or `LINEUP_LOG=lineup=trace`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub fn init() {
    let Ok(filter) = std::env::var("LINEUP_LOG") else {
        return;
    };
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn log_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("lineup")
            .join("lineup.log"),
    )
}
