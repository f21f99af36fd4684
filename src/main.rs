//! Word Ladder - CLI
//!
//! Finds shortest word ladders and inspects the word graph of a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Instant;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_dictionary, check_pair, list_neighbors,
        run_benchmark, solve_ladder,
    },
    core::symbol_count,
    dictionary::{DEFAULT_DICTIONARY, LoadOptions, load_from_file},
    graph::NeighborIndex,
    logging::init_logger,
    output::{print_benchmark_result, print_neighbors_result, print_solve_result, print_stats_result},
    search::{ExpanderType, SearchError},
};

/// Exit status for input the search cannot accept
const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status when no ladder exists
const EXIT_NO_LADDER: u8 = 1;

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Keep the dictionary's letter case instead of lowercasing it
    #[arg(long, global = true)]
    keep_case: bool,

    /// Expand each search round on all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Show details and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder from one word to another
    Solve {
        /// Starting word
        from: String,

        /// Word to reach
        to: String,
    },

    /// List the dictionary words one edit away from a word
    Neighbors {
        /// Word to look up
        word: String,
    },

    /// Summarize the word graph for one word length
    Stats {
        /// Word length to analyze
        #[arg(short, long)]
        length: usize,
    },

    /// Time the search on random word pairs
    Benchmark {
        /// Word length to draw pairs from
        #[arg(short, long)]
        length: usize,

        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pair selection
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let expander = ExpanderType::from_flag(cli.parallel);

    match &cli.command {
        Commands::Solve { from, to } => run_solve_command(&cli, from, to, expander),
        Commands::Neighbors { word } => run_neighbors_command(&cli, word),
        Commands::Stats { length } => {
            let index = load_index(&cli, *length)?;
            print_stats_result(&analyze_dictionary(&index));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Benchmark {
            length,
            count,
            seed,
        } => {
            let index = load_index(&cli, *length)?;
            let config = BenchmarkConfig {
                seed: *seed,
                expander,
                ..BenchmarkConfig::new(*count)
            };
            println!("Running benchmark on {count} random pairs...");
            print_benchmark_result(&run_benchmark(&index, &config));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the dictionary filtered to `word_len` and index it
fn load_index(cli: &Cli, word_len: usize) -> Result<NeighborIndex> {
    let mut options = LoadOptions::new(word_len);
    if cli.keep_case {
        options = options.keep_case();
    }

    let words = load_from_file(&cli.dictionary, options)
        .with_context(|| format!("Failed to read dictionary {}", cli.dictionary))?;

    let start = Instant::now();
    let index = NeighborIndex::build(&words).with_context(|| {
        format!(
            "No usable {word_len}-symbol words in dictionary {}",
            cli.dictionary
        )
    })?;
    log::debug!(
        "indexed {} words in {:.3}s",
        index.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(index)
}

/// Apply the dictionary's case normalization to a command-line word
fn normalize(cli: &Cli, word: &str) -> String {
    if cli.keep_case {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

fn run_solve_command(cli: &Cli, from: &str, to: &str, expander: ExpanderType) -> Result<ExitCode> {
    let from = normalize(cli, from);
    let to = normalize(cli, to);

    let word_len = match check_pair(&from, &to) {
        Ok(len) => len,
        Err(violation) => {
            eprintln!("error: {violation}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let index = load_index(cli, word_len)?;
    let config = SolveConfig::new(from, to).with_expander(expander);

    match solve_ladder(&config, &index) {
        Ok(result) => {
            print_solve_result(&result, cli.verbose);
            if result.success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_NO_LADDER))
            }
        }
        Err(err @ SearchError::InvalidInput(_)) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
        Err(err) => Err(err.into()),
    }
}

fn run_neighbors_command(cli: &Cli, word: &str) -> Result<ExitCode> {
    let word = normalize(cli, word);
    let word_len = symbol_count(&word);
    if word_len == 0 {
        eprintln!("error: word is empty");
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }

    let index = load_index(cli, word_len)?;
    let result = list_neighbors(&word, &index)?;
    print_neighbors_result(&result);
    Ok(ExitCode::SUCCESS)
}
