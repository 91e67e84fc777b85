// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// loaders produce:
//
//   LabeledExample  — one text span with a binary claim label
//   CorpusTable     — an ordered {text, target} table
//   EmbeddingTable  — word → fixed-length vector mapping
//   CorpusConfig    — seeds, balancing switch, error policy
//   LoadError       — the error taxonomy shared by every loader
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness (shuffling and sampling live in `data`)
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Claim / non-claim label and the labelled text span
pub mod example;

/// The ordered {text, target} corpus table
pub mod table;

/// Word → vector mapping produced by the embedding loaders
pub mod embedding;

/// Corpus loading configuration (seeds, balancing, error policy)
pub mod config;

/// Error taxonomy and malformed-record policy
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
