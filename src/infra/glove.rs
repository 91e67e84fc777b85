// ============================================================
// Layer 5 — GloVe Text Vectors
// ============================================================
// Reads GloVe-style text embeddings:
//
//   the 0.418 0.24968 -0.41242 ...
//   ,   0.013441 0.23682 -0.16899 ...
//
// One word per line, followed by its vector components, all
// separated by whitespace. Every line must have the same
// number of components as the first one. If a word appears
// twice, the later line wins.
//
// Malformed lines (invalid UTF-8, no components, a component
// that is not a number, a different dimensionality) are handled
// by the configured ErrorPolicy. Blank lines are ignored.

use std::io::BufRead;
use std::path::PathBuf;

use crate::domain::embedding::EmbeddingTable;
use crate::domain::error::{ErrorPolicy, LoadError};
use crate::domain::traits::EmbeddingSource;
use crate::infra::reader::open_buffered;

pub struct GloveLoader {
    path:   PathBuf,
    policy: ErrorPolicy,
}

impl GloveLoader {
    pub fn new(path: impl Into<PathBuf>, policy: ErrorPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }
}

impl EmbeddingSource for GloveLoader {
    fn load(&self) -> Result<EmbeddingTable, LoadError> {
        tracing::info!("Loading GloVe vectors from '{}'", self.path.display());

        let reader    = open_buffered(&self.path)?;
        let mut table = EmbeddingTable::new();

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| LoadError::file_access(&self.path, e))?;
            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    self.policy.handle(LoadError::parse(
                        &self.path,
                        idx + 1,
                        format!("line is not valid UTF-8: {}", e.utf8_error()),
                    ))?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let expected = (!table.is_empty()).then(|| table.dims());
            match parse_line(&line, expected) {
                Ok((word, vector)) => {
                    table.insert(word, vector);
                }
                Err(message) => {
                    self.policy
                        .handle(LoadError::parse(&self.path, idx + 1, message))?;
                }
            }
        }

        tracing::info!(
            "Loaded {} GloVe vectors ({} dimensions)",
            table.len(),
            table.dims()
        );
        Ok(table)
    }
}

/// Split one line into its word and vector. `expected` is the
/// dimensionality fixed by earlier lines, if any.
fn parse_line(line: &str, expected: Option<usize>) -> Result<(String, Vec<f32>), String> {
    let mut tokens = line.split_whitespace();
    let word = tokens
        .next()
        .ok_or_else(|| "empty line".to_string())?;

    let vector = tokens
        .map(|t| {
            t.parse::<f32>()
                .map_err(|_| format!("'{t}' is not a number (word '{word}')"))
        })
        .collect::<Result<Vec<f32>, String>>()?;

    if vector.is_empty() {
        return Err(format!("word '{word}' has no vector"));
    }

    if let Some(dims) = expected {
        if vector.len() != dims {
            return Err(format!(
                "word '{word}' has {} components, expected {dims}",
                vector.len()
            ));
        }
    }

    Ok((word.to_string(), vector))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load(content: impl AsRef<[u8]>, policy: ErrorPolicy) -> Result<EmbeddingTable, LoadError> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glove.txt");
        fs::write(&path, content).unwrap();
        GloveLoader::new(path, policy).load()
    }

    #[test]
    fn test_two_line_file() {
        let table = load("cat 0.1 0.2\ndog 0.3 0.4", ErrorPolicy::Abort).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.dims(), 2);
        assert_eq!(table.get("cat"), Some(&[0.1f32, 0.2][..]));
        assert_eq!(table.get("dog"), Some(&[0.3f32, 0.4][..]));
    }

    #[test]
    fn test_duplicate_word_last_wins() {
        let table = load("cat 0.1 0.2\ncat 0.5 0.6\n", ErrorPolicy::Abort).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("cat"), Some(&[0.5f32, 0.6][..]));
    }

    #[test]
    fn test_punctuation_words_and_blank_lines() {
        let table = load(", 1 2\n\n. 3 4\n", ErrorPolicy::Abort).unwrap();
        assert!(table.contains(","));
        assert!(table.contains("."));
    }

    #[test]
    fn test_malformed_lines_abort() {
        let err = load("cat 0.1 0.2\ndog 0.3 oops\n", ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let err = load("cat 0.1 0.2\ndog 0.3\n", ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let err = load("lonely\n", ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let table = load("cat 0.1 0.2\ndog 0.3\nemu 0.5 0.6\n", ErrorPolicy::Skip).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.contains("dog"));
    }

    #[test]
    fn test_invalid_utf8_line_follows_policy() {
        let content: &[u8] = b"cat 0.1 0.2\nd\xffg 0.3 0.4\nemu 0.5 0.6\n";

        let err = load(content, ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let table = load(content, ErrorPolicy::Skip).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("cat"));
        assert!(table.contains("emu"));
    }

    #[test]
    fn test_missing_file() {
        let err = GloveLoader::new("/no/such/glove.txt", ErrorPolicy::Abort)
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::FileAccess { .. }));
    }
}
