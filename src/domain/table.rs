// ============================================================
// Layer 3 — CorpusTable Domain Type
// ============================================================
// An ordered collection of LabeledExample rows, exposed as a
// two-column table {text, target}.
//
// The table itself is a thin owner of its rows. Deduplication,
// balancing and shuffling are done by the data layer, which
// consumes a table (or its rows) and produces a new one.
//
// Reference: Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::domain::example::{Label, LabeledExample};

/// Column names of a corpus table, in order
pub const COLUMNS: [&str; 2] = ["text", "target"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusTable {
    rows: Vec<LabeledExample>,
}

impl CorpusTable {
    pub fn new(rows: Vec<LabeledExample>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[LabeledExample] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<LabeledExample> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (rows, columns), the way a data frame reports its shape
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), COLUMNS.len())
    }

    /// Number of rows carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.rows.iter().filter(|r| r.target == label).count()
    }

    /// Split into (claims, non-claims), keeping row order within each side
    pub fn partition(&self) -> (Vec<LabeledExample>, Vec<LabeledExample>) {
        self.rows
            .iter()
            .cloned()
            .partition(|r| r.target == Label::Claim)
    }

    /// The first `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[LabeledExample] {
        &self.rows[..n.min(self.rows.len())]
    }
}

impl FromIterator<LabeledExample> for CorpusTable {
    fn from_iter<I: IntoIterator<Item = LabeledExample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
