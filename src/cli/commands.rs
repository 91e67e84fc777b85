// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   corpus stab | daxenberger       — load a corpus, print diagnostics
//   embeddings glove | word2vec     — load vectors, print diagnostics
//   stopwords                       — print the customised lexicon
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::config::{
    CorpusConfig, DEFAULT_BALANCE_SEED, DEFAULT_SHUFFLE_SEED, ESSAY_BALANCE_SEED,
};
use crate::domain::error::ErrorPolicy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load an argument-mining corpus and print diagnostics
    #[command(subcommand)]
    Corpus(CorpusCommands),

    /// Load pretrained word embeddings and print diagnostics
    #[command(subcommand)]
    Embeddings(EmbeddingCommands),

    /// Print the conjunction list and the customised stop words
    Stopwords,
}

#[derive(Subcommand, Debug)]
pub enum CorpusCommands {
    /// Stab & Gurevych (2017) essays, brat .ann files
    Stab(StabArgs),

    /// Daxenberger (2017) PE sentences, tab-separated .csv files
    Daxenberger(DaxenbergerArgs),
}

#[derive(Subcommand, Debug)]
pub enum EmbeddingCommands {
    /// GloVe text vectors
    Glove(GloveArgs),

    /// word2vec binary vectors (.bin or .bin.gz)
    Word2vec(Word2VecArgs),
}

/// Behaviour on malformed lines or rows
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first malformed record
    Abort,
    /// Log malformed records and continue
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(o: OnError) -> Self {
        match o {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip  => ErrorPolicy::Skip,
        }
    }
}

/// Flags shared by both corpus commands
#[derive(Args, Debug)]
pub struct CommonCorpusArgs {
    /// Seed of the final row shuffle
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_SEED)]
    pub seed: u64,

    /// What to do with malformed records
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    pub on_error: OnError,

    /// Read the corpus configuration from this JSON file
    /// (all other corpus flags are then ignored)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective corpus configuration to this JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Number of table rows to print
    #[arg(long, default_value_t = 5)]
    pub head: usize,
}

/// Arguments for `corpus stab`
#[derive(Args, Debug)]
pub struct StabArgs {
    /// Directory containing the .ann files
    #[arg(long, default_value = "data/StabGurevych17")]
    pub dir: PathBuf,

    /// Downsample premises to the number of claims
    #[arg(long)]
    pub balance: bool,

    /// Seed of the premise sample
    #[arg(long, default_value_t = ESSAY_BALANCE_SEED)]
    pub balance_seed: u64,

    #[command(flatten)]
    pub common: CommonCorpusArgs,
}

/// Arguments for `corpus daxenberger`
#[derive(Args, Debug)]
pub struct DaxenbergerArgs {
    /// Directory containing the tab-separated .csv files
    #[arg(long, default_value = "data/Daxenberger17/PE")]
    pub dir: PathBuf,

    /// Keep every distinct row instead of downsampling non-claims
    #[arg(long)]
    pub no_balance: bool,

    /// Seed of the non-claim sample
    #[arg(long, default_value_t = DEFAULT_BALANCE_SEED)]
    pub balance_seed: u64,

    #[command(flatten)]
    pub common: CommonCorpusArgs,
}

/// Convert CLI args into the domain CorpusConfig.
/// The layers below never see clap types.
impl From<&StabArgs> for CorpusConfig {
    fn from(a: &StabArgs) -> Self {
        CorpusConfig {
            dir:          a.dir.clone(),
            shuffle_seed: a.common.seed,
            balance:      a.balance,
            balance_seed: a.balance_seed,
            on_error:     a.common.on_error.into(),
        }
    }
}

impl From<&DaxenbergerArgs> for CorpusConfig {
    fn from(a: &DaxenbergerArgs) -> Self {
        CorpusConfig {
            dir:          a.dir.clone(),
            shuffle_seed: a.common.seed,
            balance:      !a.no_balance,
            balance_seed: a.balance_seed,
            on_error:     a.common.on_error.into(),
        }
    }
}

/// Arguments for `embeddings glove`
#[derive(Args, Debug)]
pub struct GloveArgs {
    /// GloVe text file (.txt or .txt.gz)
    #[arg(long, default_value = "embeddings/glove.6B.300d.txt")]
    pub path: PathBuf,

    /// What to do with malformed lines
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    pub on_error: OnError,

    /// Words to look up (vector and nearest neighbours)
    #[arg(long)]
    pub probe: Vec<String>,

    /// Number of entries to print
    #[arg(long, default_value_t = 10)]
    pub show: usize,
}

/// Arguments for `embeddings word2vec`
#[derive(Args, Debug)]
pub struct Word2VecArgs {
    /// word2vec binary file (.bin or .bin.gz)
    #[arg(long, default_value = "embeddings/GoogleNews-vectors-negative300.bin.gz")]
    pub path: PathBuf,

    /// Words to look up (vector and nearest neighbours)
    #[arg(long)]
    pub probe: Vec<String>,

    /// Number of entries to print
    #[arg(long, default_value_t = 10)]
    pub show: usize,
}
