//! Backup of the previously stored live file.
//!
//! Runs before the live file is overwritten, so it always preserves the
//! *previous* version. The backup is refreshed only when its content hash
//! differs from the live file's, which keeps repeated runs from churning
//! the backup directory.

use std::fs;
use std::path::Path;

use crate::checksum;

/// Outcome of a backup attempt. The numeric codes match the tool's reported
/// status and are kept stable for operators used to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// Live file and backup are byte-identical; nothing was copied.
    AlreadyCurrent,
    /// The live file was copied into the backup directory.
    Created,
    /// No live file to back up, or the directory/copy step failed.
    Failed,
}

impl BackupOutcome {
    pub fn code(self) -> u8 {
        match self {
            BackupOutcome::AlreadyCurrent => 0,
            BackupOutcome::Created => 1,
            BackupOutcome::Failed => 2,
        }
    }
}

/// Backs up `live_dir/file_name` into `backup_dir/file_name`.
///
/// - no live file → [`BackupOutcome::Failed`], no side effects (this is the
///   normal first-run case, before anything has been written);
/// - backup exists with the same SHA-256 → [`BackupOutcome::AlreadyCurrent`],
///   backup untouched;
/// - otherwise the backup directory is created as needed and the live file
///   copied over the backup. The copy is not atomic.
///
/// I/O failures are logged and folded into the outcome; this never panics
/// and never aborts the surrounding pipeline.
pub fn back_up_file(live_dir: &Path, backup_dir: &Path, file_name: &str) -> BackupOutcome {
    let live_path = live_dir.join(file_name);
    if !live_path.is_file() {
        tracing::debug!(path = %live_path.display(), "nothing to back up");
        return BackupOutcome::Failed;
    }

    let backup_path = backup_dir.join(file_name);
    if backup_path.is_file() {
        match (
            checksum::sha256_path(&live_path),
            checksum::sha256_path(&backup_path),
        ) {
            (Ok(live), Ok(backup)) if live == backup => {
                return BackupOutcome::AlreadyCurrent;
            }
            (Err(e), _) | (_, Err(e)) => {
                // Unreadable hash input: treat as "differs" and try the copy.
                tracing::warn!("backup hash comparison failed: {e:#}");
            }
            _ => {}
        }
    }

    let parent = backup_path.parent().unwrap_or(backup_dir);
    if let Err(e) = fs::create_dir_all(parent) {
        tracing::warn!(dir = %parent.display(), "backup dir creation failed: {e}");
        return BackupOutcome::Failed;
    }

    match fs::copy(&live_path, &backup_path) {
        Ok(_) => BackupOutcome::Created,
        Err(e) => {
            tracing::warn!(
                from = %live_path.display(),
                to = %backup_path.display(),
                "backup copy failed: {e}"
            );
            BackupOutcome::Failed
        }
    }
}
