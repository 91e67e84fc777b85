// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. `clap` parses the
// command line; every command is routed to a Layer 2 use case
// and the result is printed here.
//
// This is the only layer that prints to stdout. Diagnostics
// are printed only after a load succeeded.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{
    Commands, CommonCorpusArgs, CorpusCommands, DaxenbergerArgs, EmbeddingCommands, GloveArgs,
    StabArgs, Word2VecArgs,
};

use crate::application::corpus_use_case::{CorpusKind, CorpusReport, CorpusUseCase};
use crate::application::embeddings_use_case::{probe, EmbeddingFormat, EmbeddingsUseCase};
use crate::data::stop_words::{all_conjunctions, stop_words};
use crate::domain::config::CorpusConfig;
use crate::domain::embedding::EmbeddingTable;
use crate::infra::config_store::{load_config, save_config};
use crate::infra::stats::{CorpusStats, STAB_GUREVYCH_CLAIMS, STAB_GUREVYCH_NON_CLAIMS};

#[derive(Parser, Debug)]
#[command(
    name = "argmine",
    version,
    about = "Load argument-mining corpora, word embeddings and stop words, and print diagnostics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Corpus(CorpusCommands::Stab(args))        => run_stab(args),
            Commands::Corpus(CorpusCommands::Daxenberger(args)) => run_daxenberger(args),
            Commands::Embeddings(EmbeddingCommands::Glove(args))    => run_glove(args),
            Commands::Embeddings(EmbeddingCommands::Word2vec(args)) => run_word2vec(args),
            Commands::Stopwords => {
                print_stop_words();
                Ok(())
            }
        }
    }
}

// ─── Corpus commands ──────────────────────────────────────────────────────────

fn run_stab(args: StabArgs) -> Result<()> {
    let config = resolve_config(&args.common, CorpusConfig::from(&args))?;
    let report = CorpusUseCase::new(CorpusKind::StabGurevych, config).execute()?;

    print_report(&report, args.common.head);

    let ex = &report.extracted;
    println!(
        "Claims in corpus according to Stab and Gurevych (2017): {STAB_GUREVYCH_CLAIMS}. Claims loaded: {}",
        ex.claims
    );
    println!(
        "Non-claims in corpus according to Stab and Gurevych (2017): {STAB_GUREVYCH_NON_CLAIMS}. Non-claims loaded: {}",
        ex.non_claims
    );
    println!("Majority baseline: {:.2}", ex.majority_baseline());
    print_lengths("clause", ex);
    Ok(())
}

fn run_daxenberger(args: DaxenbergerArgs) -> Result<()> {
    let config = resolve_config(&args.common, CorpusConfig::from(&args))?;
    let report = CorpusUseCase::new(CorpusKind::Daxenberger, config).execute()?;

    print_report(&report, args.common.head);
    println!("Majority baseline (before balancing): {:.2}", report.extracted.majority_baseline());
    print_lengths("sentence", &report.loaded);
    Ok(())
}

/// Use the JSON config file if one was given, otherwise the flags.
/// Optionally persist whichever config is in effect.
fn resolve_config(common: &CommonCorpusArgs, from_flags: CorpusConfig) -> Result<CorpusConfig> {
    let config = match &common.config {
        Some(path) => load_config(path)?,
        None => from_flags,
    };

    if let Some(path) = &common.save_config {
        save_config(path, &config)?;
        println!("Saved corpus config to '{}'", path.display());
    }

    Ok(config)
}

fn print_report(report: &CorpusReport, head: usize) {
    let (rows, cols) = report.table.shape();
    println!("Extracted: {} claims, {} non-claims", report.extracted.claims, report.extracted.non_claims);
    println!("Table shape: ({rows}, {cols})");
    println!("Loaded: {} claims, {} non-claims", report.loaded.claims, report.loaded.non_claims);

    println!("\n{:>5}  {:<6}  text", "row", "target");
    for (i, row) in report.table.head(head).iter().enumerate() {
        println!("{i:>5}  {:<6}  {}", row.target.target(), row.text);
    }
    println!();
}

fn print_lengths(level: &str, stats: &CorpusStats) {
    println!("Average length of claim at {level} level: {}", stats.avg_claim_len);
    println!("Average length of non-claim at {level} level: {}", stats.avg_non_claim_len);
}

// ─── Embedding commands ───────────────────────────────────────────────────────

fn run_glove(args: GloveArgs) -> Result<()> {
    let format = EmbeddingFormat::Glove { on_error: args.on_error.into() };
    let table  = EmbeddingsUseCase::new(&args.path, format).execute()?;
    print_embeddings(&table, args.show, &args.probe);
    Ok(())
}

fn run_word2vec(args: Word2VecArgs) -> Result<()> {
    let table = EmbeddingsUseCase::new(&args.path, EmbeddingFormat::Word2Vec).execute()?;
    print_embeddings(&table, args.show, &args.probe);
    Ok(())
}

fn print_embeddings(table: &EmbeddingTable, show: usize, probes: &[String]) {
    println!("{} vectors, {} dimensions", table.len(), table.dims());

    let mut entries: Vec<(&str, &[f32])> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (word, vector) in entries.into_iter().take(show) {
        println!("{word}: {}", preview(vector));
    }

    for word in probes {
        let p = probe(table, word);
        match p.vector {
            None => println!("\n'{}' is not in the vocabulary", p.word),
            Some(vector) => {
                println!("\n{}: {}", p.word, preview(&vector));
                println!("Most similar to '{}':", p.word);
                for (neighbour, score) in &p.neighbours {
                    println!("  {neighbour:<20} {score:.4}");
                }
            }
        }
    }
}

/// First few components of a vector, for display
fn preview(vector: &[f32]) -> String {
    const SHOWN: usize = 5;
    let head: Vec<String> = vector.iter().take(SHOWN).map(|x| format!("{x:.4}")).collect();
    if vector.len() > SHOWN {
        format!("[{}, ...]", head.join(", "))
    } else {
        format!("[{}]", head.join(", "))
    }
}

// ─── Stop words ───────────────────────────────────────────────────────────────

fn print_stop_words() {
    let conjunctions = all_conjunctions();
    println!("All conjunctions only:\n");
    println!("{conjunctions:?}");
    println!("{}", conjunctions.len());

    let lexicon = stop_words();
    let words: Vec<&str> = lexicon.iter().collect();
    println!("Stop words without conjunctions:\n");
    println!("{words:?}");
    println!("{}", lexicon.len());
}
