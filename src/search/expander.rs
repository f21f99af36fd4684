//! Frontier expansion strategies
//!
//! An expander looks up the neighbors of every frontier word for one round.
//! It only gathers candidates; claiming them is left to the serial merge in the
//! engine, so all expanders produce identical ladders.

use crate::graph::NeighborIndex;
use rayon::prelude::*;

/// Gathers neighbor candidates for a whole frontier
pub trait Expander {
    /// Neighbors of each frontier word, one list per word, in frontier order
    fn expand<'a>(&self, index: &'a NeighborIndex, frontier: &[&'a str]) -> Vec<Vec<&'a str>>;
}

/// Enum wrapper for all expander types
///
/// Allows runtime selection of expander while maintaining static dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpanderType {
    /// One word after another on the calling thread
    #[default]
    Serial,
    /// Frontier words looked up concurrently on the rayon pool
    Parallel,
}

impl Expander for ExpanderType {
    fn expand<'a>(&self, index: &'a NeighborIndex, frontier: &[&'a str]) -> Vec<Vec<&'a str>> {
        match self {
            Self::Serial => SerialExpander.expand(index, frontier),
            Self::Parallel => ParallelExpander::default().expand(index, frontier),
        }
    }
}

impl ExpanderType {
    /// Create expander from name string
    ///
    /// Supported names: "serial", "parallel"
    /// Defaults to serial if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "par" => Self::Parallel,
            _ => Self::Serial,
        }
    }

    #[must_use]
    pub const fn from_flag(parallel: bool) -> Self {
        if parallel { Self::Parallel } else { Self::Serial }
    }
}

fn neighbors_of<'a>(index: &'a NeighborIndex, word: &'a str) -> Vec<&'a str> {
    index
        .neighbor_ids(word)
        .map(|id| index.word(id).text())
        .collect()
}

/// Serial expansion
pub struct SerialExpander;

impl Expander for SerialExpander {
    fn expand<'a>(&self, index: &'a NeighborIndex, frontier: &[&'a str]) -> Vec<Vec<&'a str>> {
        frontier.iter().map(|&word| neighbors_of(index, word)).collect()
    }
}

/// Parallel expansion for wide frontiers
///
/// Frontiers narrower than `min_parallel` are expanded serially.
pub struct ParallelExpander {
    pub min_parallel: usize,
}

impl ParallelExpander {
    #[must_use]
    pub const fn new(min_parallel: usize) -> Self {
        Self { min_parallel }
    }
}

impl Default for ParallelExpander {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Expander for ParallelExpander {
    fn expand<'a>(&self, index: &'a NeighborIndex, frontier: &[&'a str]) -> Vec<Vec<&'a str>> {
        if frontier.len() < self.min_parallel {
            return SerialExpander.expand(index, frontier);
        }

        // Indexed collect keeps frontier order
        frontier
            .par_iter()
            .map(|&word| neighbors_of(index, word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> NeighborIndex {
        NeighborIndex::build(["dog", "dig", "dug", "dag", "dot", "cot", "cat", "cog", "cag"])
            .unwrap()
    }

    #[test]
    fn serial_keeps_frontier_order() {
        let index = sample_index();
        let lists = SerialExpander.expand(&index, &["cat", "dog"]);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], vec!["cot", "cag"]);
        assert_eq!(lists[1], vec!["cog", "dig", "dug", "dag", "dot"]);
    }

    #[test]
    fn parallel_matches_serial() {
        let index = sample_index();
        let frontier: Vec<&str> = index.words().collect();

        let serial = SerialExpander.expand(&index, &frontier);
        let parallel = ParallelExpander::new(0).expand(&index, &frontier);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn expander_type_from_name() {
        assert_eq!(ExpanderType::from_name("parallel"), ExpanderType::Parallel);
        assert_eq!(ExpanderType::from_name("serial"), ExpanderType::Serial);
        assert_eq!(ExpanderType::from_name("bogus"), ExpanderType::Serial);
        assert_eq!(ExpanderType::from_flag(true), ExpanderType::Parallel);
    }

    #[test]
    fn parallel_default_threshold() {
        assert_eq!(ParallelExpander::default().min_parallel, 64);
    }
}
