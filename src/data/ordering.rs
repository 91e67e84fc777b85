// ============================================================
// Layer 4 — Deduplication and Seeded Shuffle
// ============================================================
// The last steps every corpus goes through:
//
//   rows ──► drop_duplicates ──► (downsample) ──► shuffle_seeded ──► CorpusTable
//
// Shuffling uses a Fisher-Yates shuffle (rand::seq::SliceRandom)
// driven by a ChaCha8 stream seeded from the configuration, so a
// re-run on the same files yields the same row order on every
// platform.
//
// Reference: Rust Book §8 (Vectors)
//            rand / rand_chacha crate documentation

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::hash::Hash;

use crate::data::balancer::downsample_majority;
use crate::domain::config::CorpusConfig;
use crate::domain::error::LoadError;
use crate::domain::example::LabeledExample;
use crate::domain::table::CorpusTable;

/// Remove exact duplicates, keeping the first occurrence of each row
/// and the relative order of the survivors.
pub fn drop_duplicates<T>(rows: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(row.clone())).collect()
}

/// Shuffle `rows` with a generator seeded from `seed`.
/// The same input and seed always produce the same permutation.
pub fn shuffle_seeded<T>(mut rows: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rows.shuffle(&mut rng);
    rows
}

/// Turn extracted corpus rows into the final table:
/// deduplicate, downsample if configured, then shuffle.
pub fn prepare_table(
    rows:   Vec<LabeledExample>,
    config: &CorpusConfig,
) -> Result<CorpusTable, LoadError> {
    let extracted = rows.len();
    let rows      = drop_duplicates(rows);

    tracing::debug!(
        "Dropped {} duplicate rows ({} remain)",
        extracted - rows.len(),
        rows.len()
    );

    let rows = if config.balance {
        downsample_majority(&CorpusTable::new(rows), config.balance_seed)?.into_rows()
    } else {
        rows
    };

    let table = CorpusTable::new(shuffle_seeded(rows, config.shuffle_seed));

    tracing::info!(
        "Prepared corpus table: {} rows (seed {}{})",
        table.len(),
        config.shuffle_seed,
        if config.balance { ", balanced" } else { "" }
    );

    Ok(table)
}
