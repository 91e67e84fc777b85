// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// File formats and cross-cutting concerns that are not part of
// the corpus pipeline itself:
//
//   reader.rs        — buffered file opening, transparent .gz
//
//   glove.rs         — GloVe text vectors → EmbeddingTable
//
//   word2vec.rs      — word2vec binary vectors → EmbeddingTable
//                      (header checked before reading)
//
//   stats.rs         — per-class counts, span lengths and the
//                      majority baseline of a loaded corpus
//
//   config_store.rs  — CorpusConfig ⇄ JSON file
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Buffered, gzip-aware file opening
pub mod reader;

/// GloVe text embedding loader
pub mod glove;

/// word2vec binary embedding loader
pub mod word2vec;

/// Corpus statistics
pub mod stats;

/// Corpus config persistence
pub mod config_store;
