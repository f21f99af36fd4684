//! Level-synchronous breadth-first ladder search

use super::error::{InputViolation, SearchError};
use super::expander::{Expander, ExpanderType};
use super::ladder::Ladder;
use super::reservation::Reservations;
use crate::core::symbol_count;
use crate::graph::NeighborIndex;

/// Shortest-ladder search over a [`NeighborIndex`]
///
/// Each round expands the whole frontier, then claims the unreserved
/// candidates in frontier order. A contested word therefore always goes to the
/// earliest frontier word that can reach it, whichever expander gathered the
/// candidates.
pub struct LadderSearch<'a, E: Expander = ExpanderType> {
    index: &'a NeighborIndex,
    expander: E,
}

impl<'a> LadderSearch<'a> {
    /// Create a search using the serial expander
    #[must_use]
    pub fn new(index: &'a NeighborIndex) -> Self {
        Self {
            index,
            expander: ExpanderType::Serial,
        }
    }
}

impl<'a, E: Expander> LadderSearch<'a, E> {
    /// Swap in a different frontier expander
    #[must_use]
    pub fn with_expander<F: Expander>(self, expander: F) -> LadderSearch<'a, F> {
        LadderSearch {
            index: self.index,
            expander,
        }
    }

    /// The index this search runs over
    #[must_use]
    pub const fn index(&self) -> &'a NeighborIndex {
        self.index
    }

    /// Find a shortest ladder from `source` to `target`
    ///
    /// Neither word has to be in the dictionary. The source is always
    /// reservable; an absent target is simply never reached.
    ///
    /// # Errors
    ///
    /// - `SearchError::InvalidInput` if a word is empty, the two lengths
    ///   differ, or they differ from the dictionary's word length
    /// - `SearchError::NoPathFound` if the frontier runs dry first
    pub fn find<'s>(&self, source: &'s str, target: &'s str) -> Result<Ladder, SearchError>
    where
        'a: 's,
    {
        self.validate(source, target)?;

        if source == target {
            return Ok(Ladder::new(vec![source.to_string()]));
        }

        let mut reservations = Reservations::with_root(source);
        let mut frontier: Vec<&'s str> = vec![source];
        let mut depth = 0;

        loop {
            let candidates = self.expander.expand(self.index, &frontier);
            let mut next = Vec::new();

            for (&parent, neighbors) in frontier.iter().zip(candidates) {
                for word in neighbors {
                    if !reservations.reserve(word, parent, depth + 1) {
                        continue;
                    }
                    if word == target {
                        return Ok(reconstruct(&reservations, target));
                    }
                    next.push(word);
                }
            }

            if next.is_empty() {
                return Err(SearchError::NoPathFound {
                    source: source.to_string(),
                    target: target.to_string(),
                    explored: reservations.len(),
                    depth,
                });
            }

            frontier = next;
            depth += 1;
        }
    }

    fn validate(&self, source: &str, target: &str) -> Result<(), InputViolation> {
        let found = validate_pair(source, target)?;
        if found != self.index.word_len() {
            return Err(InputViolation::DictionaryLengthMismatch {
                expected: self.index.word_len(),
                found,
            });
        }
        Ok(())
    }
}

/// Check a source/target pair independently of any dictionary
///
/// Returns the shared symbol count.
///
/// # Errors
///
/// Returns the first violated constraint: empty source, empty target, or
/// differing lengths.
pub fn validate_pair(source: &str, target: &str) -> Result<usize, InputViolation> {
    let source_len = symbol_count(source);
    let target_len = symbol_count(target);

    if source_len == 0 {
        return Err(InputViolation::EmptySource);
    }
    if target_len == 0 {
        return Err(InputViolation::EmptyTarget);
    }
    if source_len != target_len {
        return Err(InputViolation::LengthMismatch {
            source: source_len,
            target: target_len,
        });
    }
    Ok(source_len)
}

fn reconstruct<'s>(reservations: &Reservations<'s>, target: &'s str) -> Ladder {
    let words = reservations
        .path_to(target)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ladder::new(words)
}

/// Find a shortest ladder with the default serial search
///
/// # Errors
///
/// See [`LadderSearch::find`].
///
/// # Examples
/// ```
/// use word_ladder::graph::NeighborIndex;
/// use word_ladder::search::find_ladder;
///
/// let index = NeighborIndex::build(["dog", "cog", "cag", "cat"]).unwrap();
/// let ladder = find_ladder(&index, "dog", "cat").unwrap();
/// assert_eq!(ladder.to_string(), "dog/cog/cag/cat");
/// ```
pub fn find_ladder(
    index: &NeighborIndex,
    source: &str,
    target: &str,
) -> Result<Ladder, SearchError> {
    LadderSearch::new(index).find(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    const SAMPLE: &[&str] = &["dog", "dig", "dug", "dag", "dot", "cot", "cat", "cog", "cag"];

    fn sample_index() -> NeighborIndex {
        NeighborIndex::build(SAMPLE).unwrap()
    }

    fn words(ladder: &Ladder) -> Vec<&str> {
        ladder.words().iter().map(String::as_str).collect()
    }

    /// Unweighted distances from `source` by plain BFS over pairwise checks
    fn brute_force_distances<'a>(dictionary: &[&'a str], source: &'a str) -> HashMap<&'a str, usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(source, 0);
        queue.push_back(source);

        while let Some(word) = queue.pop_front() {
            let d = dist[word];
            for &other in dictionary {
                if crate::core::hamming_distance(word, other) == Some(1)
                    && !dist.contains_key(other)
                {
                    dist.insert(other, d + 1);
                    queue.push_back(other);
                }
            }
        }
        dist
    }

    #[test]
    fn single_edit_ladder() {
        let index = sample_index();
        let ladder = find_ladder(&index, "dog", "dig").unwrap();
        assert_eq!(words(&ladder), vec!["dog", "dig"]);
    }

    #[test]
    fn direct_edge_preferred_over_detour() {
        let index = sample_index();
        let ladder = find_ladder(&index, "dog", "dag").unwrap();
        assert_eq!(words(&ladder), vec!["dog", "dag"]);
    }

    #[test]
    fn multi_step_ladder() {
        let index = sample_index();
        let ladder = find_ladder(&index, "dog", "cat").unwrap();
        assert_eq!(ladder.steps(), 3);
        assert_eq!(words(&ladder), vec!["dog", "cog", "cag", "cat"]);
    }

    #[test]
    fn unreachable_target_reports_no_path() {
        let index = sample_index();
        let err = find_ladder(&index, "dog", "xyz").unwrap_err();
        assert_eq!(
            err,
            SearchError::NoPathFound {
                source: "dog".to_string(),
                target: "xyz".to_string(),
                explored: SAMPLE.len(),
                depth: 3,
            }
        );
    }

    #[test]
    fn mismatched_lengths_are_invalid() {
        let index = sample_index();
        assert_eq!(
            find_ladder(&index, "abc", "de").unwrap_err(),
            SearchError::InvalidInput(InputViolation::LengthMismatch {
                source: 3,
                target: 2
            })
        );
    }

    #[test]
    fn empty_words_are_invalid() {
        let index = sample_index();
        assert_eq!(
            find_ladder(&index, "", "dog").unwrap_err(),
            SearchError::InvalidInput(InputViolation::EmptySource)
        );
        assert_eq!(
            find_ladder(&index, "dog", "").unwrap_err(),
            SearchError::InvalidInput(InputViolation::EmptyTarget)
        );
    }

    #[test]
    fn dictionary_length_mismatch_is_invalid() {
        let index = sample_index();
        assert_eq!(
            find_ladder(&index, "dogs", "cats").unwrap_err(),
            SearchError::InvalidInput(InputViolation::DictionaryLengthMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn same_word_returns_single_element() {
        let index = sample_index();
        assert_eq!(words(&find_ladder(&index, "dog", "dog").unwrap()), vec!["dog"]);
        // Membership is not required
        assert_eq!(words(&find_ladder(&index, "zzz", "zzz").unwrap()), vec!["zzz"]);
    }

    #[test]
    fn source_outside_dictionary_is_searchable() {
        let index = sample_index();
        assert!(!index.contains("dop"));
        let ladder = find_ladder(&index, "dop", "cot").unwrap();
        assert_eq!(words(&ladder), vec!["dop", "dot", "cot"]);
    }

    #[test]
    fn isolated_source_reports_no_path() {
        let index = sample_index();
        let err = find_ladder(&index, "xyz", "dog").unwrap_err();
        assert_eq!(
            err,
            SearchError::NoPathFound {
                source: "xyz".to_string(),
                target: "dog".to_string(),
                explored: 1,
                depth: 0,
            }
        );
    }

    #[test]
    fn tie_break_goes_to_first_frontier_word() {
        // "aa" reaches "bb" through both "ba" and "ab"; "ba" comes first in
        // the frontier because position 0 keys are scanned first.
        let index = NeighborIndex::build(["aa", "ab", "ba", "bb"]).unwrap();
        let ladder = find_ladder(&index, "aa", "bb").unwrap();
        assert_eq!(words(&ladder), vec!["aa", "ba", "bb"]);

        // Reordering the dictionary does not change which neighbor is found
        // first, since position order dominates.
        let index = NeighborIndex::build(["bb", "ab", "ba", "aa"]).unwrap();
        let ladder = find_ladder(&index, "aa", "bb").unwrap();
        assert_eq!(words(&ladder), vec!["aa", "ba", "bb"]);
    }

    #[test]
    fn tie_break_follows_insertion_order_within_position() {
        let index = NeighborIndex::build(["ax", "cx", "bx", "cz", "bz", "az"]).unwrap();
        // Depth 1 frontier is [cx, bx, az]; both bx and az touch bz
        let ladder = find_ladder(&index, "ax", "bz").unwrap();
        assert_eq!(ladder.steps(), 2);
        assert_eq!(words(&ladder), vec!["ax", "bx", "bz"]);
    }

    #[test]
    fn search_is_idempotent() {
        let index = sample_index();
        for &source in SAMPLE {
            for &target in SAMPLE {
                let first = find_ladder(&index, source, target);
                let second = find_ladder(&index, source, target);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn ladders_are_valid_and_shortest() {
        let index = sample_index();
        for &source in SAMPLE {
            let distances = brute_force_distances(SAMPLE, source);
            for &target in SAMPLE {
                let ladder = find_ladder(&index, source, target).unwrap();
                assert!(ladder.is_valid(), "{ladder} is not a ladder");
                assert_eq!(ladder.source(), source);
                assert_eq!(ladder.target(), target);
                assert_eq!(ladder.steps(), distances[target], "{source} -> {target}");
                assert!(ladder.words().iter().all(|w| index.contains(w)));
            }
        }
    }

    #[test]
    fn optimal_on_a_longer_chain() {
        let dictionary = [
            "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "corm",
        ];
        let index = NeighborIndex::build(dictionary).unwrap();
        let ladder = find_ladder(&index, "cold", "warm").unwrap();
        let distances = brute_force_distances(&dictionary, "cold");

        assert!(ladder.is_valid());
        assert_eq!(ladder.steps(), distances["warm"]);
        assert_eq!(ladder.steps(), 4);
    }

    #[test]
    fn parallel_expander_matches_serial() {
        use crate::search::ParallelExpander;

        let index = sample_index();
        let parallel = LadderSearch::new(&index).with_expander(ParallelExpander::new(0));
        let serial = LadderSearch::new(&index);

        for &source in SAMPLE {
            for &target in SAMPLE {
                assert_eq!(
                    serial.find(source, target),
                    parallel.find(source, target)
                );
            }
        }
        assert_eq!(
            serial.find("dog", "xyz"),
            parallel.find("dog", "xyz")
        );
    }
}
