//! Logging init: file under the XDG state dir, or stderr when unavailable.
//!
//! Operator-facing status stays on stdout; tracing output is diagnostics
//! only, so it goes to the log file and never interleaves with the status
//! lines.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,regget=debug"))
}

/// Opens (appending) the log file at `~/.local/state/regget/regget.log`.
fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("regget")?;
    let log_dir = xdg_dirs.get_state_home().join("regget");
    fs::create_dir_all(&log_dir)?;

    let path = log_dir.join("regget.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((file, path))
}

/// Initialize tracing. Prefers the state-dir log file; falls back to stderr
/// when the state dir cannot be used (the CLI must still run).
pub fn init() {
    let (writer, log_path) = match open_log_file() {
        Ok((file, path)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        Err(_) => (BoxMakeWriter::new(io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    if let Some(path) = log_path {
        tracing::info!("regget logging initialized at {}", path.display());
    }
}
