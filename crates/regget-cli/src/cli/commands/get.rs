//! `regget <url>` – fetch a regulations document and refresh the local copy.

use anyhow::{anyhow, Result};
use regget_core::backup::BackupOutcome;
use regget_core::config::RegGetConfig;
use regget_core::fetch::FetchError;
use regget_core::refresh;
use regget_core::url_model;

/// Runs the full pipeline and prints the status lines the operator expects.
///
/// Returns Err (non-zero exit) when the fetch fails or no file name can be
/// derived; backup and write failures are reported as text only.
pub fn run_get(cfg: &RegGetConfig, url: &str) -> Result<()> {
    let file_name = url_model::file_name_from_url(url)
        .ok_or_else(|| anyhow!("cannot derive a file name from URL: {url}"))?;

    println!("Trying to get {file_name} from: {url}");

    let report = match refresh::refresh_document(
        &cfg.regulations_dir,
        &cfg.backup_dir,
        &file_name,
        url,
    ) {
        Ok(report) => report,
        Err(err @ FetchError::Status(_)) => {
            println!("File not found ({err})");
            return Err(err.into());
        }
        Err(err @ FetchError::Transport(_)) => {
            println!("Failed to get content of {file_name} file from: {url}");
            println!("{err}");
            return Err(err.into());
        }
    };

    println!("Regulations downloaded ({} bytes)", report.bytes_fetched);

    println!("Creating backup...");
    match report.backup {
        BackupOutcome::AlreadyCurrent => println!("File {file_name} already backed up!"),
        BackupOutcome::Created => println!("Backup created successfully!"),
        BackupOutcome::Failed => println!("Failed to create backup!"),
    }

    println!("Updating {file_name} file...");
    match &report.write_error {
        None => println!("File update success!"),
        Some(msg) => println!("Failed to update {file_name} file! ({msg})"),
    }

    Ok(())
}
