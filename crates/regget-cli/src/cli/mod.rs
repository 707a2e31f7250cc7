//! CLI for the regget regulations updater.

mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use regget_core::config;
use std::io::{self, Write};

use commands::run_get;

/// Fetch a regulations document from a remote server and refresh the local
/// copy, backing up the previous version when it changed.
#[derive(Debug, Parser)]
#[command(name = "regget")]
#[command(about = "regget: update local regulations files from a remote server", long_about = None)]
pub struct Cli {
    /// Direct HTTP/HTTPS URL of the regulations document (e.g.
    /// http://your-server/en.html). Prompted for interactively if omitted.
    pub url: Option<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let url = match cli.url {
            Some(url) => url,
            None => prompt_url()?,
        };

        run_get(&cfg, url.trim())
    }
}

/// Asks the operator for the URL when it was not passed as an argument.
fn prompt_url() -> Result<String> {
    print!("Define regulations server url: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let url = line.trim().to_string();
    if url.is_empty() {
        bail!("no URL provided");
    }
    Ok(url)
}

#[cfg(test)]
mod tests;
