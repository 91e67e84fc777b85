// ============================================================
// Layer 3 — EmbeddingTable Domain Type
// ============================================================
// Word → vector mapping shared by the GloVe and word2vec loaders.
//
// Every vector in one table has the same length (`dims`). The
// first inserted vector fixes the dimensionality; the loaders
// reject mismatching lines before they reach `insert`.
//
// Inserting a word that already exists replaces its vector,
// so the last occurrence in a file wins.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingTable {
    dims: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the vector for `word`.
    /// Returns the previous vector if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) -> Option<Vec<f32>> {
        if self.vectors.is_empty() {
            self.dims = vector.len();
        }
        self.vectors.insert(word.into(), vector)
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Vector length shared by every entry (0 for an empty table)
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.vectors.iter().map(|(w, v)| (w.as_str(), v.as_slice()))
    }

    /// The `k` words closest to `word` by cosine similarity, best first.
    ///
    /// Returns None if `word` is not in the table. The query word itself
    /// and zero-length vectors are never returned. Ties are broken by word
    /// so the result is stable across runs.
    pub fn most_similar(&self, word: &str, k: usize) -> Option<Vec<(String, f32)>> {
        let query = self.vectors.get(word)?;
        let query_norm = norm(query);
        if query_norm == 0.0 {
            return Some(Vec::new());
        }

        let mut scored: Vec<(String, f32)> = self
            .vectors
            .iter()
            .filter(|(w, _)| w.as_str() != word)
            .filter_map(|(w, v)| {
                let n = norm(v);
                if n == 0.0 {
                    return None;
                }
                Some((w.clone(), dot(query, v) / (query_norm * n)))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);

        Some(scored)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}
