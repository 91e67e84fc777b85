// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw corpus files to a finished table:
//
//   .ann files                     .csv files
//       │                              │
//       ▼                              ▼
//   brat reader                   csv reader (tab, no header)
//       │                              │
//       ▼                              ▼
//   BratCorpusLoader           DelimitedCorpusLoader
//       └──────────────┬───────────────┘
//                      ▼
//              drop_duplicates
//                      │
//                      ▼
//          downsample_majority (optional)
//                      │
//                      ▼
//               shuffle_seeded
//                      │
//                      ▼
//                 CorpusTable
//
// The stop-word lexicon also lives here: it is static text
// data for the consumers of these tables.
//
// Reference: Rust Book §7 (Modules)

/// Brat standoff (.ann) parser
pub mod brat;

/// Corpus directory listing
pub mod files;

/// Annotated essay loader (brat entities → labelled rows)
pub mod brat_loader;

/// Tab-separated sentence loader
pub mod delimited_loader;

/// Majority-class downsampling
pub mod balancer;

/// Deduplication and seeded shuffling
pub mod ordering;

/// Customised stop-word lexicon
pub mod stop_words;
