// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers for one goal at a time:
//
//   corpus_use_case      — load a corpus and compute its statistics
//   embeddings_use_case  — load a vector file and probe it
//
// Rules for this layer:
//   - No file parsing here (that's Layer 4 and 5)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus loading workflow
pub mod corpus_use_case;

// The embedding loading workflow
pub mod embeddings_use_case;
