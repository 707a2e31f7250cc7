//! HTTP GET of the remote regulations document.
//!
//! Uses the curl crate (libcurl) with a single blocking transfer; the body
//! is buffered in memory since regulations documents are small HTML files.

use std::time::Duration;
use thiserror::Error;

/// Why a fetch did not produce a document. Transport and status failures are
/// kept apart so the caller can report them differently.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported a transport failure (DNS, connect, TLS, timeout).
    /// The Display form includes the curl error code.
    #[error("curl error: {0}")]
    Transport(#[from] curl::Error),
    /// The server answered, but not with 200.
    #[error("HTTP {0}")]
    Status(u32),
}

/// Performs a blocking GET and returns the response body.
///
/// Follows redirects; success requires the final status to be exactly 200.
/// Any other status yields [`FetchError::Status`] and the body is discarded.
pub fn fetch_document(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        tracing::debug!(url, code, "fetch rejected by status");
        return Err(FetchError::Status(code));
    }

    tracing::debug!(url, bytes = body.len(), "fetch completed");
    Ok(body)
}
