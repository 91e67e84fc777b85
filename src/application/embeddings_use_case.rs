// ============================================================
// Layer 2 — EmbeddingsUseCase
// ============================================================
// Loads a pretrained vector file and, optionally, looks up a
// probe word: its vector and its nearest neighbours.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::embedding::EmbeddingTable;
use crate::domain::error::ErrorPolicy;
use crate::domain::traits::EmbeddingSource;
use crate::infra::glove::GloveLoader;
use crate::infra::word2vec::Word2VecLoader;

/// Number of neighbours reported for a probe word
pub const NEIGHBOURS: usize = 10;

/// Vector file formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingFormat {
    /// GloVe text vectors
    Glove { on_error: ErrorPolicy },
    /// word2vec binary vectors (optionally gzipped)
    Word2Vec,
}

/// Result of probing the table with a single word
#[derive(Debug, Clone)]
pub struct Probe {
    pub word:       String,
    pub vector:     Option<Vec<f32>>,
    pub neighbours: Vec<(String, f32)>,
}

pub struct EmbeddingsUseCase {
    path:   PathBuf,
    format: EmbeddingFormat,
}

impl EmbeddingsUseCase {
    pub fn new(path: impl Into<PathBuf>, format: EmbeddingFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Load the full table.
    pub fn execute(&self) -> Result<EmbeddingTable> {
        let source: Box<dyn EmbeddingSource> = match &self.format {
            EmbeddingFormat::Glove { on_error } => Box::new(GloveLoader::new(&self.path, *on_error)),
            EmbeddingFormat::Word2Vec => Box::new(Word2VecLoader::new(&self.path)),
        };

        source
            .load()
            .with_context(|| format!("Cannot load embeddings from '{}'", self.path.display()))
    }
}

/// Look up `word` in `table`.
pub fn probe(table: &EmbeddingTable, word: &str) -> Probe {
    Probe {
        word:       word.to_string(),
        vector:     table.get(word).map(<[f32]>::to_vec),
        neighbours: table.most_similar(word, NEIGHBOURS).unwrap_or_default(),
    }
}
