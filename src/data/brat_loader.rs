// ============================================================
// Layer 4 — Annotated Essay Loader
// ============================================================
// Loads the Stab & Gurevych (2017) persuasive-essay corpus from
// a directory of brat `.ann` files.
//
// For every entity in every file:
//   MajorClaim / Claim  → row with target 1
//   Premise             → row with target 0
//   anything else       → ignored
//
// Rows from all files are aggregated, then deduplicated,
// optionally balanced and shuffled (ordering::prepare_table).
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators)

use std::path::Path;

use crate::data::brat::read_ann_file;
use crate::data::files::list_files;
use crate::data::ordering::prepare_table;
use crate::domain::config::CorpusConfig;
use crate::domain::error::LoadError;
use crate::domain::example::{Label, LabeledExample};
use crate::domain::table::CorpusTable;
use crate::domain::traits::CorpusSource;

/// Loads labelled argument components from brat `.ann` files.
pub struct BratCorpusLoader {
    config: CorpusConfig,
}

impl BratCorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    fn extract_file(&self, path: &Path) -> Result<Vec<LabeledExample>, LoadError> {
        let doc = read_ann_file(path, self.config.on_error)?;

        let rows: Vec<LabeledExample> = doc
            .entities
            .into_iter()
            .filter_map(|entity| {
                Label::from_entity_type(&entity.kind)
                    .map(|label| LabeledExample::new(entity.text, label))
            })
            .collect();

        tracing::debug!("Loaded: {} ({} labelled spans)", path.display(), rows.len());
        Ok(rows)
    }
}

impl CorpusSource for BratCorpusLoader {
    fn config(&self) -> &CorpusConfig {
        &self.config
    }

    fn extract(&self) -> Result<Vec<LabeledExample>, LoadError> {
        let files = list_files(&self.config.dir, "ann")?;

        let mut rows = Vec::new();
        for path in &files {
            rows.extend(self.extract_file(path)?);
        }

        tracing::info!(
            "Extracted {} labelled spans from {} annotation files in '{}'",
            rows.len(),
            files.len(),
            self.config.dir.display()
        );
        Ok(rows)
    }

    fn load(&self) -> Result<CorpusTable, LoadError> {
        prepare_table(self.extract()?, &self.config)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn loader(dir: &Path) -> BratCorpusLoader {
        BratCorpusLoader::new(CorpusConfig::default().with_dir(dir))
    }

    #[test]
    fn test_duplicate_premise_collapses() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("essay001.ann"),
            "T1\tMajorClaim 0 9\tX is true\n\
             T2\tPremise 10 22\tY supports X\n\
             T3\tPremise 30 42\tY supports X\n",
        )
        .unwrap();

        let l = loader(dir.path());
        assert_eq!(l.extract().unwrap().len(), 3);

        let table = l.load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(Label::Claim), 1);
        assert_eq!(table.count(Label::NonClaim), 1);
    }

    #[test]
    fn test_other_entity_types_and_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("essay001.ann"),
            "T1\tClaim 0 4\tclaim one\n\
             T2\tStance 5 9\tignored\n\
             A1\tStance T1 For\n\
             R1\tsupports Arg1:T2 Arg2:T1\n",
        )
        .unwrap();
        fs::write(dir.path().join("essay001.txt"), "raw essay text").unwrap();

        let rows = loader(dir.path()).extract().unwrap();
        assert_eq!(rows, vec![LabeledExample::new("claim one", Label::Claim)]);
    }

    #[test]
    fn test_aggregates_files_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.ann"), "T1\tPremise 0 1\tsecond\n").unwrap();
        fs::write(dir.path().join("a.ann"), "T1\tClaim 0 1\tfirst\n").unwrap();

        let rows = loader(dir.path()).extract().unwrap();
        assert_eq!(rows[0].text, "first");
        assert_eq!(rows[1].text, "second");
    }

    #[test]
    fn test_load_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let mut content = String::new();
        for i in 0..30 {
            let kind = if i % 3 == 0 { "Claim" } else { "Premise" };
            content.push_str(&format!("T{i}\t{kind} 0 1\tspan number {i}\n"));
        }
        fs::write(dir.path().join("essay.ann"), content).unwrap();

        let l = loader(dir.path());
        let first  = l.load().unwrap();
        let second = l.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);
    }

    #[test]
    fn test_empty_directory_gives_empty_table() {
        let dir = TempDir::new().unwrap();
        let table = loader(dir.path()).load().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = loader(&dir.path().join("nope")).load().unwrap_err();
        assert!(matches!(err, LoadError::FileAccess { .. }));
    }

    #[test]
    fn test_malformed_file_aborts_by_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.ann"), "T1\tClaim\n").unwrap();

        let err = loader(dir.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let skipping = BratCorpusLoader::new(CorpusConfig {
            on_error: ErrorPolicy::Skip,
            ..CorpusConfig::default().with_dir(dir.path())
        });
        assert!(skipping.load().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_line_is_skippable() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("essay.ann"),
            b"T1\tClaim 0 4\tclaim\nT2\tPremise 5 9\tb\xffd\nT3\tPremise 10 14\tpremise\n",
        )
        .unwrap();

        let err = loader(dir.path()).extract().unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let skipping = BratCorpusLoader::new(CorpusConfig {
            on_error: ErrorPolicy::Skip,
            ..CorpusConfig::default().with_dir(dir.path())
        });
        let rows = skipping.extract().unwrap();
        assert_eq!(
            rows,
            vec![
                LabeledExample::new("claim", Label::Claim),
                LabeledExample::new("premise", Label::NonClaim),
            ]
        );
    }

    #[test]
    fn test_balanced_load() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("essay.ann"),
            "T1\tClaim 0 1\tc\nT2\tPremise 0 1\tp1\nT3\tPremise 0 1\tp2\nT4\tPremise 0 1\tp3\n",
        )
        .unwrap();

        let l = BratCorpusLoader::new(CorpusConfig {
            balance: true,
            ..CorpusConfig::stab_gurevych().with_dir(dir.path())
        });
        let table = l.load().unwrap();
        assert_eq!(table.count(Label::Claim), 1);
        assert_eq!(table.count(Label::NonClaim), 1);
    }
}
