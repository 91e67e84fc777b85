// ============================================================
// Layer 3 — Corpus Configuration
// ============================================================
// Everything a corpus load depends on besides the files:
//
//   dir           — directory holding the corpus files
//   shuffle_seed  — seed of the final row shuffle
//   balance       — downsample the majority class before shuffling
//   balance_seed  — seed of the majority-class sample
//   on_error      — abort or skip on malformed records
//
// Serialisable so a run can be reproduced from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::ErrorPolicy;

/// Default seed of the final row shuffle
pub const DEFAULT_SHUFFLE_SEED: u64 = 1;

/// Default seed of the majority-class sample
pub const DEFAULT_BALANCE_SEED: u64 = 0;

/// Majority-class seed historically used for the annotated essays
pub const ESSAY_BALANCE_SEED: u64 = 44;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub dir:          PathBuf,
    pub shuffle_seed: u64,
    pub balance:      bool,
    pub balance_seed: u64,
    pub on_error:     ErrorPolicy,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir:          PathBuf::from("data"),
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            balance:      false,
            balance_seed: DEFAULT_BALANCE_SEED,
            on_error:     ErrorPolicy::Abort,
        }
    }
}

impl CorpusConfig {
    /// Preset for the Stab & Gurevych (2017) annotated essays.
    /// Balancing is opt-in for this corpus.
    pub fn stab_gurevych() -> Self {
        Self {
            dir:          PathBuf::from("data/StabGurevych17"),
            balance_seed: ESSAY_BALANCE_SEED,
            ..Self::default()
        }
    }

    /// Preset for the Daxenberger (2017) persuasive-essay sentences.
    /// This corpus is balanced by default.
    pub fn daxenberger() -> Self {
        Self {
            dir:     PathBuf::from("data/Daxenberger17/PE"),
            balance: true,
            ..Self::default()
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let essays = CorpusConfig::stab_gurevych();
        assert!(!essays.balance);
        assert_eq!(essays.balance_seed, 44);
        assert_eq!(essays.shuffle_seed, 1);

        let pe = CorpusConfig::daxenberger();
        assert!(pe.balance);
        assert_eq!(pe.balance_seed, 0);
        assert_eq!(pe.dir, PathBuf::from("data/Daxenberger17/PE"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: CorpusConfig =
            serde_json::from_str(r#"{"dir": "corpus", "on_error": "skip"}"#).unwrap();
        assert_eq!(cfg.dir, PathBuf::from("corpus"));
        assert_eq!(cfg.on_error, ErrorPolicy::Skip);
        assert_eq!(cfg.shuffle_seed, DEFAULT_SHUFFLE_SEED);
        assert!(!cfg.balance);
    }
}
