// ============================================================
// Layer 5 — word2vec Binary Vectors
// ============================================================
// Loads pretrained word2vec vectors in the original binary
// format (e.g. GoogleNews-vectors-negative300.bin.gz):
//
//   "<word count> <dims>\n"
//   then per word: "<word> " followed by <dims> little-endian f32
//
// The reference tool writes a newline after every vector; other
// writers omit it, so whitespace before a word is dropped.
//
// The header is checked before anything is read on its behalf.
// For an uncompressed file the declared payload must fit in the
// file. Vectors are read one at a time, so a gzipped file with a
// lying header fails at its end instead of allocating up front.
//
// A word that appears twice keeps its last vector.

use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::io::{BufRead, Read};
use std::path::PathBuf;

use crate::domain::embedding::EmbeddingTable;
use crate::domain::error::LoadError;
use crate::domain::traits::EmbeddingSource;
use crate::infra::reader::{is_gzip, open_buffered};

pub struct Word2VecLoader {
    path: PathBuf,
}

impl Word2VecLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn malformed(&self, message: impl Into<String>) -> LoadError {
        LoadError::Embedding {
            path:    self.path.clone(),
            message: message.into(),
        }
    }

    /// Parse "<word count> <dims>" from the first line.
    fn read_header(&self, reader: &mut dyn BufRead) -> Result<(usize, usize), LoadError> {
        let mut line = Vec::new();
        reader
            .read_until(b'\n', &mut line)
            .map_err(|e| LoadError::file_access(&self.path, e))?;

        let text = std::str::from_utf8(&line)
            .map_err(|_| self.malformed("header is not valid UTF-8"))?;
        let mut fields = text.split_whitespace().map(str::parse::<usize>);

        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(n_words)), Some(Ok(dims)), None) if dims > 0 || n_words == 0 => {
                Ok((n_words, dims))
            }
            _ => Err(self.malformed(format!(
                "expected a '<word count> <dims>' header, found '{}'",
                text.trim()
            ))),
        }
    }

    /// Reject headers whose declared payload cannot exist.
    /// Returns the byte length of one vector.
    fn check_payload(&self, n_words: usize, dims: usize) -> Result<usize, LoadError> {
        let too_large = || {
            self.malformed(format!(
                "header declares {n_words} words of {dims} dimensions, which is too large"
            ))
        };
        let vector_bytes = dims.checked_mul(4).ok_or_else(too_large)?;
        let payload = n_words.checked_mul(vector_bytes).ok_or_else(too_large)?;

        if !is_gzip(&self.path) {
            let len = fs::metadata(&self.path)
                .map_err(|e| LoadError::file_access(&self.path, e))?
                .len();
            if payload as u64 > len {
                return Err(self.malformed(format!(
                    "header declares {n_words} words of {dims} dimensions \
                     ({payload} bytes) but the file holds {len} bytes"
                )));
            }
        }

        Ok(vector_bytes)
    }
}

impl EmbeddingSource for Word2VecLoader {
    fn load(&self) -> Result<EmbeddingTable, LoadError> {
        tracing::info!("Loading word2vec vectors from '{}'", self.path.display());

        let mut reader = open_buffered(&self.path)?;
        let (n_words, dims) = self.read_header(&mut *reader)?;
        let vector_bytes = self.check_payload(n_words, dims)?;
        tracing::debug!("Header: {n_words} words, {dims} dimensions");

        let mut table = EmbeddingTable::new();
        let mut word  = Vec::new();
        let mut raw   = Vec::new();

        for idx in 0..n_words {
            word.clear();
            reader
                .read_until(b' ', &mut word)
                .map_err(|e| LoadError::file_access(&self.path, e))?;
            if word.pop() != Some(b' ') {
                return Err(self.malformed(format!(
                    "file ends after {idx} of {n_words} words"
                )));
            }

            let start = word
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(word.len());
            let text = std::str::from_utf8(&word[start..])
                .map_err(|e| self.malformed(format!("word {} is not valid UTF-8: {e}", idx + 1)))?;
            if text.is_empty() {
                return Err(self.malformed(format!("word {} is empty", idx + 1)));
            }

            raw.clear();
            reader
                .by_ref()
                .take(vector_bytes as u64)
                .read_to_end(&mut raw)
                .map_err(|e| LoadError::file_access(&self.path, e))?;
            if raw.len() != vector_bytes {
                return Err(self.malformed(format!(
                    "vector of '{text}' is truncated ({} of {vector_bytes} bytes)",
                    raw.len()
                )));
            }

            let mut vector = vec![0.0f32; dims];
            LittleEndian::read_f32_into(&raw, &mut vector);
            if table.insert(text, vector).is_some() {
                tracing::debug!("Word '{text}' appears more than once; keeping the last vector");
            }
        }

        tracing::info!(
            "Loaded {} word2vec vectors ({} dimensions)",
            table.len(),
            table.dims()
        );
        Ok(table)
    }
}
