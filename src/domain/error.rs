// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every loader reports failures through LoadError:
//
//   FileAccess — file or directory missing / unreadable
//   Parse      — malformed annotation, CSV or embedding line
//   Sampling   — more rows requested than the population holds
//   Embedding  — the binary vector decoder rejected the file
//
// Errors are never retried. Whether a malformed *record* aborts
// the whole load or is skipped is decided by ErrorPolicy; an
// unreadable file is always fatal.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot access '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record in '{path}' at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Cannot sample {requested} rows without replacement from a population of {available}")]
    Sampling { requested: usize, available: usize },

    #[error("Cannot decode embeddings from '{path}': {message}")]
    Embedding { path: PathBuf, message: String },
}

impl LoadError {
    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        LoadError::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

/// What to do with a malformed record (line or row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Fail the whole load on the first malformed record
    #[default]
    Abort,
    /// Log the record at WARN level and continue with the next one
    Skip,
}

impl ErrorPolicy {
    /// Apply the policy to a malformed-record error.
    /// Under `Abort` the error is returned; under `Skip` it is logged
    /// and swallowed.
    pub fn handle(self, err: LoadError) -> Result<(), LoadError> {
        match self {
            ErrorPolicy::Abort => Err(err),
            ErrorPolicy::Skip => {
                tracing::warn!("Skipping malformed record: {err}");
                Ok(())
            }
        }
    }
}
