// ============================================================
// Layer 2 — CorpusUseCase
// ============================================================
// Orchestrates one corpus load:
//
//   Step 1: Pick the loader for the corpus kind   (Layer 4 - data)
//   Step 2: Extract labelled rows from the files  (Layer 4 - data)
//   Step 3: Deduplicate, balance, shuffle         (Layer 4 - data)
//   Step 4: Compute statistics before and after   (Layer 5 - infra)
//
// Extraction runs once; the raw rows feed both the statistics
// and the table preparation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::brat_loader::BratCorpusLoader;
use crate::data::delimited_loader::DelimitedCorpusLoader;
use crate::data::ordering::prepare_table;
use crate::domain::config::CorpusConfig;
use crate::domain::table::CorpusTable;
use crate::domain::traits::CorpusSource;
use crate::infra::stats::CorpusStats;

/// Which corpus layout to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorpusKind {
    /// Stab & Gurevych (2017) essays, brat `.ann` files
    StabGurevych,
    /// Daxenberger (2017) PE sentences, tab-separated `.csv` files
    Daxenberger,
}

/// Everything a corpus load produces
#[derive(Debug, Clone)]
pub struct CorpusReport {
    /// The final table (deduplicated, optionally balanced, shuffled)
    pub table: CorpusTable,

    /// Statistics of the rows as extracted, before deduplication
    pub extracted: CorpusStats,

    /// Statistics of the final table
    pub loaded: CorpusStats,
}

pub struct CorpusUseCase {
    kind:   CorpusKind,
    config: CorpusConfig,
}

impl CorpusUseCase {
    pub fn new(kind: CorpusKind, config: CorpusConfig) -> Self {
        Self { kind, config }
    }

    pub fn execute(&self) -> Result<CorpusReport> {
        let cfg = &self.config;

        // ── Step 1: Pick the loader ───────────────────────────────────────────
        let source: Box<dyn CorpusSource> = match self.kind {
            CorpusKind::StabGurevych => Box::new(BratCorpusLoader::new(cfg.clone())),
            CorpusKind::Daxenberger  => Box::new(DelimitedCorpusLoader::new(cfg.clone())),
        };

        // ── Step 2: Extract rows ──────────────────────────────────────────────
        tracing::info!("Loading {:?} corpus from '{}'", self.kind, cfg.dir.display());
        let rows = source
            .extract()
            .with_context(|| format!("Cannot load corpus from '{}'", cfg.dir.display()))?;
        let extracted = CorpusStats::from_rows(&rows);

        // ── Step 3: Deduplicate, balance, shuffle ─────────────────────────────
        let table = prepare_table(rows, source.config())
            .context("Cannot prepare corpus table")?;

        // ── Step 4: Final statistics ──────────────────────────────────────────
        let loaded = CorpusStats::from_rows(table.rows());

        tracing::info!(
            "Corpus ready: {} rows ({} claims, {} non-claims)",
            table.len(),
            loaded.claims,
            loaded.non_claims
        );

        Ok(CorpusReport {
            table,
            extracted,
            loaded,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::Label;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_essay_report() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("essay001.ann"),
            "T1\tMajorClaim 0 9\tX is true\n\
             T2\tPremise 10 22\tY supports X\n\
             T3\tPremise 30 42\tY supports X\n",
        )
        .unwrap();

        let report = CorpusUseCase::new(
            CorpusKind::StabGurevych,
            CorpusConfig::stab_gurevych().with_dir(dir.path()),
        )
        .execute()
        .unwrap();

        assert_eq!(report.extracted.claims, 1);
        assert_eq!(report.extracted.non_claims, 2);
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.loaded.claims, 1);
        assert_eq!(report.loaded.non_claims, 1);
    }

    #[test]
    fn test_delimited_report_is_balanced() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pe.csv"),
            "a text\t1\nb text\t0\nc text\t0\n",
        )
        .unwrap();

        let report = CorpusUseCase::new(
            CorpusKind::Daxenberger,
            CorpusConfig::daxenberger().with_dir(dir.path()),
        )
        .execute()
        .unwrap();

        assert_eq!(report.table.count(Label::Claim), 1);
        assert_eq!(report.table.count(Label::NonClaim), 1);
        assert_eq!(report.extracted.total(), 3);
    }

    #[test]
    fn test_error_mentions_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = CorpusUseCase::new(
            CorpusKind::Daxenberger,
            CorpusConfig::daxenberger().with_dir(&missing),
        )
        .execute()
        .unwrap_err();

        assert!(format!("{err:#}").contains("missing"));
    }
}
