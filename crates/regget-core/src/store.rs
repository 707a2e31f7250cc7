//! Writing the downloaded document to its live location.

use anyhow::{Context, Result};
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Composes the live path for `file_name` under `live_dir`. The file name
/// may carry its own sub-path segments (e.g. `app/en.html`).
pub fn document_path(live_dir: &Path, file_name: &str) -> PathBuf {
    live_dir.join(file_name)
}

/// Writes `data` to the live path, truncating any previous content.
///
/// Missing intermediate directories implied by the composed path are created
/// first (recursively; no error when they already exist).
pub fn write_document(live_dir: &Path, file_name: &str, data: &[u8]) -> Result<()> {
    let path = document_path(live_dir, file_name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }

    let mut file =
        File::create(&path).with_context(|| format!("open {} for writing", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_into_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("storage/regulations");

        write_document(&live, "en.html", b"<html>v1</html>").unwrap();
        assert_eq!(fs::read(live.join("en.html")).unwrap(), b"<html>v1</html>");
    }

    #[test]
    fn nested_file_name_creates_intermediate_directories() {
        let dir = tempfile::tempdir().unwrap();

        write_document(dir.path(), "app/en.html", b"nested").unwrap();
        assert_eq!(fs::read(dir.path().join("app/en.html")).unwrap(), b"nested");
    }

    #[test]
    fn rewrite_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "en.html", b"a much longer first version").unwrap();

        write_document(dir.path(), "en.html", b"short").unwrap();
        assert_eq!(fs::read(dir.path().join("en.html")).unwrap(), b"short");
    }

    #[test]
    fn empty_body_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "en.html", b"").unwrap();
        assert_eq!(fs::read(dir.path().join("en.html")).unwrap(), b"");
    }
}
