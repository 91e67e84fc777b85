//! Loaders for argument-mining corpora (brat essays, tab-separated
//! sentences), pretrained word embeddings (GloVe, word2vec) and a
//! customised stop-word lexicon.
//!
//! The crate is layered:
//!
//! - `cli`          — Layer 1, argument parsing and printing
//! - `application`  — Layer 2, use cases
//! - `domain`       — Layer 3, plain types and traits
//! - `data`         — Layer 4, corpus pipeline
//! - `infra`        — Layer 5, file formats and persistence

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
