// ============================================================
// Layer 4 — Corpus Directory Listing
// ============================================================
// Both corpus loaders read "every file with extension X in a
// directory". Entries are returned sorted by path so the
// pre-shuffle row order does not depend on the filesystem's
// directory iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::LoadError;

/// All regular files directly inside `dir` whose extension is `ext`,
/// sorted by path. A missing or unreadable directory is an error;
/// a directory without matching files yields an empty list.
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::file_access(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| LoadError::file_access(dir, e))?.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ext) {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!("Found {} .{} files in '{}'", files.len(), ext, dir.display());
    Ok(files)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_matching_files_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.ann", "a.ann", "a.txt", "c.ann.bak"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.ann")).unwrap();

        let files = list_files(dir.path(), "ann").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.ann", "b.ann"]);
    }

    #[test]
    fn test_missing_directory_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let err = list_files(&dir.path().join("absent"), "ann").unwrap_err();
        assert!(matches!(err, LoadError::FileAccess { .. }));
    }
}
