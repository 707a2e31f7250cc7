//! Target file name derivation from the source URL.
//!
//! The live file and its backup share one name: the last path segment of the
//! URL. Parsing goes through the `url` crate so query strings and fragments
//! never leak into the name.

/// Derives the target file name from `url`: the last non-empty path segment,
/// with NUL and control characters replaced by `_`.
///
/// Returns `None` when the URL does not parse or its path has no usable
/// segment (root path, trailing slash only, `.`/`..`).
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()?;

    let name: String = segment
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect();

    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}
