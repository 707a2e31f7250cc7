//! The fetch → backup → write pipeline.
//!
//! A fetch failure short-circuits before any file is touched. A backup
//! failure does not stop the write: the freshly downloaded content is the
//! reason the tool was run, so it is persisted regardless.

use std::path::Path;

use crate::backup::{self, BackupOutcome};
use crate::fetch::{self, FetchError};
use crate::store;

/// What a completed (post-fetch) refresh run did.
#[derive(Debug)]
pub struct RefreshReport {
    /// Outcome of backing up the previous live file.
    pub backup: BackupOutcome,
    /// Size of the downloaded document.
    pub bytes_fetched: usize,
    /// Set when persisting the new content failed; the run still completes.
    pub write_error: Option<String>,
}

/// Fetches `url` and, on success, backs up the previous live copy of
/// `file_name` and writes the new content under `live_dir`.
///
/// Errors only on fetch failure (transport or non-200), in which case
/// neither the live file nor the backup is created or modified.
pub fn refresh_document(
    live_dir: &Path,
    backup_dir: &Path,
    file_name: &str,
    url: &str,
) -> Result<RefreshReport, FetchError> {
    let body = fetch::fetch_document(url)?;

    let backup = backup::back_up_file(live_dir, backup_dir, file_name);

    let write_error = store::write_document(live_dir, file_name, &body)
        .err()
        .map(|e| format!("{e:#}"));
    if let Some(msg) = &write_error {
        tracing::warn!(file_name, "write failed: {msg}");
    }

    Ok(RefreshReport {
        backup,
        bytes_fetched: body.len(),
        write_error,
    })
}
