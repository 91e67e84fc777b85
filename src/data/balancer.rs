// ============================================================
// Layer 4 — Class Balancer
// ============================================================
// Downsamples the majority class (target = 0) to the size of
// the minority class (target = 1).
//
//   minority = every row with target 1        (kept as-is)
//   majority = every row with target 0        (sampled)
//   result   = sample(majority, |minority|) ++ minority
//
// The result is NOT reshuffled; callers that need a random
// order shuffle afterwards (see ordering::prepare_table).
//
// Label 1 must really be the smaller class. If it is not, the
// sample would need more rows than exist, which is reported as
// LoadError::Sampling rather than silently truncated.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::error::LoadError;
use crate::domain::example::LabeledExample;
use crate::domain::table::CorpusTable;

/// Return a class-balanced copy of `table`.
///
/// Sampling is uniform and without replacement, driven by `seed`.
/// A table without claim rows yields an empty table.
pub fn downsample_majority(table: &CorpusTable, seed: u64) -> Result<CorpusTable, LoadError> {
    let (minority, majority) = table.partition();

    if minority.len() > majority.len() {
        return Err(LoadError::Sampling {
            requested: minority.len(),
            available: majority.len(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sampled: Vec<LabeledExample> = majority
        .choose_multiple(&mut rng, minority.len())
        .cloned()
        .collect();

    tracing::debug!(
        "Downsampled majority class from {} to {} rows (seed {})",
        majority.len(),
        sampled.len(),
        seed
    );

    Ok(sampled.into_iter().chain(minority).collect())
}
