//! Benchmark command
//!
//! Runs the search on random source/target pairs drawn from the dictionary.

use crate::graph::NeighborIndex;
use crate::search::{ExpanderType, Ladder, LadderSearch, SearchError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to search
    pub count: usize,
    /// Seed for pair selection; random when `None`
    pub seed: Option<u64>,
    pub expander: ExpanderType,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            expander: ExpanderType::Serial,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub not_found: usize,
    pub average_steps: f64,
    pub max_steps: usize,
    /// Longest ladder seen, first one on ties
    pub longest: Option<Ladder>,
    /// Ladder step count to number of pairs
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run the search on `config.count` random pairs
///
/// Pairs are drawn with replacement, so a pair may repeat and source may equal
/// target.
pub fn run_benchmark(index: &NeighborIndex, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let search = LadderSearch::new(index).with_expander(config.expander);

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut found = 0;
    let mut total_steps = 0;
    let mut max_steps = 0;
    let mut longest: Option<Ladder> = None;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for i in 0..config.count {
        let source = index.word(rng.random_range(0..index.len())).text();
        let target = index.word(rng.random_range(0..index.len())).text();

        match search.find(source, target) {
            Ok(ladder) => {
                let steps = ladder.steps();
                found += 1;
                total_steps += steps;
                *distribution.entry(steps).or_insert(0) += 1;
                if longest.is_none() || steps > max_steps {
                    max_steps = steps;
                    longest = Some(ladder);
                }
            }
            Err(SearchError::NoPathFound { .. }) => {}
            Err(err) => log::warn!("benchmark pair {source} -> {target} rejected: {err}"),
        }

        if i % 10 == 0 {
            pb.set_message(format!("found {found}/{}", i + 1));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_pairs = config.count;

    BenchmarkResult {
        total_pairs,
        found,
        not_found: total_pairs - found,
        average_steps: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        max_steps,
        longest,
        distribution,
        duration,
        searches_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
