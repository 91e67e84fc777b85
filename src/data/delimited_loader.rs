// ============================================================
// Layer 4 — Delimited Sentence Loader
// ============================================================
// Loads the Daxenberger (2017) persuasive-essay sentences from
// a directory of tab-separated `.csv` files:
//
//   <sentence text>\t<label>
//
// No header row. Exactly two columns per row. The label must be
// 0 or 1 ("1.0" style floats are accepted); a row with another
// label or another column count is malformed and handled by the
// configured ErrorPolicy.
//
// Quoting follows the usual CSV rules (double quotes), so a tab
// inside a quoted text field does not split the row.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::Path;

use crate::data::files::list_files;
use crate::data::ordering::prepare_table;
use crate::domain::config::CorpusConfig;
use crate::domain::error::LoadError;
use crate::domain::example::{Label, LabeledExample};
use crate::domain::table::CorpusTable;
use crate::domain::traits::CorpusSource;

/// Loads labelled sentences from tab-separated files.
pub struct DelimitedCorpusLoader {
    config: CorpusConfig,
}

impl DelimitedCorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    fn extract_file(&self, path: &Path) -> Result<Vec<LabeledExample>, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, 0, e))?;

        let policy   = self.config.on_error;
        let mut rows = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            let fallback_line = idx + 1;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    let err = csv_error(path, fallback_line, e);
                    // I/O failures are never skippable
                    if matches!(err, LoadError::FileAccess { .. }) {
                        return Err(err);
                    }
                    policy.handle(err)?;
                    continue;
                }
            };

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(fallback_line);

            if record.len() != 2 {
                policy.handle(LoadError::parse(
                    path,
                    line,
                    format!("expected 2 tab-separated columns, found {}", record.len()),
                ))?;
                continue;
            }

            match Label::parse_target(&record[1]) {
                Some(target) => rows.push(LabeledExample::new(&record[0], target)),
                None => policy.handle(LoadError::parse(
                    path,
                    line,
                    format!("target must be 0 or 1, found '{}'", &record[1]),
                ))?,
            }
        }

        tracing::debug!("Loaded: {} ({} rows)", path.display(), rows.len());
        Ok(rows)
    }
}

impl CorpusSource for DelimitedCorpusLoader {
    fn config(&self) -> &CorpusConfig {
        &self.config
    }

    fn extract(&self) -> Result<Vec<LabeledExample>, LoadError> {
        let files = list_files(&self.config.dir, "csv")?;

        let mut rows = Vec::new();
        for path in &files {
            rows.extend(self.extract_file(path)?);
        }

        tracing::info!(
            "Extracted {} rows from {} delimited files in '{}'",
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

/// Map a csv error onto the loader taxonomy.
fn csv_error(path: &Path, fallback_line: usize, err: csv::Error) -> LoadError {
    let line = err
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(fallback_line);
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::file_access(path, source),
        _ => LoadError::parse(path, line, message),
    }
}
