// ============================================================
// Layer 5 — Corpus Statistics
// ============================================================
// Summary numbers reported after a corpus load:
//
//   claims / non_claims  — rows per class
//   majority_baseline    — accuracy of always predicting non-claim
//   avg_*_len            — mean span length in whitespace words
//
// Stab & Gurevych (2017) report 2257 claims (incl. major claims)
// and 3832 premises for their essay corpus; the CLI prints the
// extracted counts next to these reference numbers.
//
// Example:
//   claims=2257 non_claims=3832 baseline=0.63
//   avg_claim_len=14.2 avg_non_claim_len=18.9

use serde::{Deserialize, Serialize};

use crate::domain::example::{Label, LabeledExample};

/// Claims reported for the Stab & Gurevych (2017) essays
pub const STAB_GUREVYCH_CLAIMS: usize = 2257;

/// Premises reported for the Stab & Gurevych (2017) essays
pub const STAB_GUREVYCH_NON_CLAIMS: usize = 3832;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub claims: usize,
    pub non_claims: usize,

    /// Mean number of whitespace-separated words per claim
    pub avg_claim_len: f64,

    /// Mean number of whitespace-separated words per non-claim
    pub avg_non_claim_len: f64,
}

impl CorpusStats {
    pub fn from_rows(rows: &[LabeledExample]) -> Self {
        let (claims, claim_words) = class_totals(rows, Label::Claim);
        let (non_claims, non_claim_words) = class_totals(rows, Label::NonClaim);

        Self {
            claims,
            non_claims,
            avg_claim_len: mean(claim_words, claims),
            avg_non_claim_len: mean(non_claim_words, non_claims),
        }
    }

    pub fn total(&self) -> usize {
        self.claims + self.non_claims
    }

    /// Share of non-claims, i.e. the accuracy of a classifier that
    /// always predicts the majority class. 0.0 for an empty corpus.
    pub fn majority_baseline(&self) -> f64 {
        mean(self.non_claims, self.total())
    }
}

/// (row count, total word count) for one class
fn class_totals(rows: &[LabeledExample], label: Label) -> (usize, usize) {
    rows.iter()
        .filter(|r| r.target == label)
        .fold((0, 0), |(n, words), r| (n + 1, words + r.word_count()))
}

fn mean(sum: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_averages() {
        let rows = vec![
            LabeledExample::new("X is true", Label::Claim),
            LabeledExample::new("Y supports X", Label::NonClaim),
            LabeledExample::new("Z", Label::NonClaim),
            LabeledExample::new("W also holds here", Label::NonClaim),
        ];
        let s = CorpusStats::from_rows(&rows);
        assert_eq!(s.claims, 1);
        assert_eq!(s.non_claims, 3);
        assert_eq!(s.avg_claim_len, 3.0);
        assert!((s.avg_non_claim_len - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.majority_baseline(), 0.75);
    }

    #[test]
    fn test_empty_corpus() {
        let s = CorpusStats::from_rows(&[]);
        assert_eq!(s.total(), 0);
        assert_eq!(s.majority_baseline(), 0.0);
        assert_eq!(s.avg_claim_len, 0.0);
    }
}
