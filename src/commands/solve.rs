//! Ladder solving command
//!
//! Solves a single source/target pair and reports the ladder with timing.

use crate::graph::NeighborIndex;
use crate::search::{
    ExpanderType, InputViolation, Ladder, LadderSearch, SearchError, validate_pair,
};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub source: String,
    pub target: String,
    pub expander: ExpanderType,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(source: String, target: String) -> Self {
        Self {
            source,
            target,
            expander: ExpanderType::Serial,
        }
    }

    #[must_use]
    pub const fn with_expander(mut self, expander: ExpanderType) -> Self {
        self.expander = expander;
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub source: String,
    pub target: String,
    /// The ladder, or `None` when source and target are disconnected
    pub ladder: Option<Ladder>,
    /// Words reserved before giving up (only set when no ladder exists)
    pub explored: Option<usize>,
    pub source_in_dictionary: bool,
    pub target_in_dictionary: bool,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.ladder.is_some()
    }
}

/// Check a source/target pair before loading a dictionary
///
/// Lets the caller reject bad input with a clear message before the
/// dictionary is read. Returns the length the dictionary must be filtered to.
///
/// # Errors
///
/// Returns the first violated constraint: empty source, empty target, or
/// differing lengths.
pub fn check_pair(source: &str, target: &str) -> Result<usize, InputViolation> {
    validate_pair(source, target)
}

/// Solve a single ladder
///
/// A disconnected pair is a normal outcome and is reported through
/// `SolveResult::ladder` being `None`.
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if the pair cannot be searched in
/// `index`.
pub fn solve_ladder(config: &SolveConfig, index: &NeighborIndex) -> Result<SolveResult, SearchError> {
    let start = Instant::now();
    let search = LadderSearch::new(index).with_expander(config.expander);

    let (ladder, explored) = match search.find(&config.source, &config.target) {
        Ok(ladder) => (Some(ladder), None),
        Err(SearchError::NoPathFound { explored, depth, .. }) => {
            log::debug!(
                "search from {} exhausted after {explored} words at depth {depth}",
                config.source
            );
            (None, Some(explored))
        }
        Err(err) => return Err(err),
    };

    let duration = start.elapsed();
    log::debug!(
        "{} -> {}: {} in {:.3}ms",
        config.source,
        config.target,
        ladder
            .as_ref()
            .map_or_else(|| "no ladder".to_string(), |l| format!("{} steps", l.steps())),
        duration.as_secs_f64() * 1000.0
    );

    Ok(SolveResult {
        source: config.source.clone(),
        target: config.target.clone(),
        source_in_dictionary: index.contains(&config.source),
        target_in_dictionary: index.contains(&config.target),
        ladder,
        explored,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> NeighborIndex {
        NeighborIndex::build(["dog", "dig", "dug", "dag", "dot", "cot", "cat", "cog", "cag"])
            .unwrap()
    }

    #[test]
    fn solve_finds_ladder() {
        let index = sample_index();
        let config = SolveConfig::new("dog".to_string(), "cat".to_string());

        let result = solve_ladder(&config, &index).unwrap();

        assert!(result.success());
        assert_eq!(result.ladder.unwrap().to_string(), "dog/cog/cag/cat");
        assert!(result.explored.is_none());
        assert!(result.source_in_dictionary);
        assert!(result.target_in_dictionary);
    }

    #[test]
    fn solve_reports_disconnected_pair() {
        let index = sample_index();
        let config = SolveConfig::new("dog".to_string(), "xyz".to_string());

        let result = solve_ladder(&config, &index).unwrap();

        assert!(!result.success());
        assert_eq!(result.explored, Some(9));
        assert!(!result.target_in_dictionary);
    }

    #[test]
    fn solve_rejects_invalid_input() {
        let index = sample_index();
        let config = SolveConfig::new("abc".to_string(), "de".to_string());

        let result = solve_ladder(&config, &index);
        assert!(matches!(result, Err(SearchError::InvalidInput(_))));
    }

    #[test]
    fn solve_with_parallel_expander() {
        let index = sample_index();
        let config = SolveConfig::new("dog".to_string(), "cat".to_string())
            .with_expander(ExpanderType::Parallel);

        let result = solve_ladder(&config, &index).unwrap();
        assert_eq!(result.ladder.unwrap().steps(), 3);
    }

    #[test]
    fn check_pair_returns_length() {
        assert_eq!(check_pair("dog", "cat"), Ok(3));
        assert_eq!(check_pair("", "cat"), Err(InputViolation::EmptySource));
        assert_eq!(check_pair("dog", ""), Err(InputViolation::EmptyTarget));
        assert_eq!(
            check_pair("dog", "cats"),
            Err(InputViolation::LengthMismatch {
                source: 3,
                target: 4
            })
        );
    }
}
