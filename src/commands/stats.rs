//! Dictionary analysis command
//!
//! Builds the word graph for one word length and summarizes it.

use crate::graph::{GraphStats, NeighborIndex};
use std::time::{Duration, Instant};

/// Graph statistics together with how long they took
pub struct StatsResult {
    pub word_len: usize,
    pub stats: GraphStats,
    pub duration: Duration,
}

/// Analyze the connectivity of the word graph
#[must_use]
pub fn analyze_dictionary(index: &NeighborIndex) -> StatsResult {
    let start = Instant::now();
    let stats = GraphStats::compute(index);
    let duration = start.elapsed();

    log::debug!(
        "analyzed {} words ({} edges) in {:.3}s",
        stats.words,
        stats.edges,
        duration.as_secs_f64()
    );

    StatsResult {
        word_len: index.word_len(),
        stats,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_reports_word_length() {
        let index = NeighborIndex::build(["cold", "cord", "card"]).unwrap();
        let result = analyze_dictionary(&index);

        assert_eq!(result.word_len, 4);
        assert_eq!(result.stats.words, 3);
        assert_eq!(result.stats.edges, 2);
        assert_eq!(result.stats.components, 1);
    }
}
