// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to loaders only through these
// traits, so a new corpus or vector format is one more impl:
//
//   CorpusSource     ← BratCorpusLoader, DelimitedCorpusLoader
//   EmbeddingSource  ← GloveLoader, Word2VecLoader
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::config::CorpusConfig;
use crate::domain::embedding::EmbeddingTable;
use crate::domain::error::LoadError;
use crate::domain::example::LabeledExample;
use crate::domain::table::CorpusTable;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that turns a directory of corpus files into a table.
pub trait CorpusSource {
    /// The configuration this source was built with
    fn config(&self) -> &CorpusConfig;

    /// Read every file and return the labelled rows in corpus order,
    /// before deduplication, balancing or shuffling.
    fn extract(&self) -> Result<Vec<LabeledExample>, LoadError>;

    /// Extract, deduplicate, optionally balance and shuffle.
    fn load(&self) -> Result<CorpusTable, LoadError>;
}

// ─── EmbeddingSource ──────────────────────────────────────────────────────────
/// Any component that can load a word → vector mapping.
pub trait EmbeddingSource {
    fn load(&self) -> Result<EmbeddingTable, LoadError>;
}
