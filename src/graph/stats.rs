//! Whole-graph statistics
//!
//! Summarizes the shape of the word graph: how connected it is and where the
//! hubs are. Useful for judging whether a dictionary can produce long ladders.

use super::{NeighborIndex, WordId};
use rayon::prelude::*;

/// Summary of the word graph induced by a [`NeighborIndex`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of dictionary words (nodes)
    pub words: usize,
    /// Number of undirected edges
    pub edges: usize,
    /// Words with no neighbors
    pub isolated: usize,
    /// Highest degree and the first word attaining it
    pub max_degree: (String, usize),
    /// Number of connected components
    pub components: usize,
    /// Size of the largest connected component
    pub largest_component: usize,
}

impl GraphStats {
    /// Compute statistics for the whole index
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::{GraphStats, NeighborIndex};
    ///
    /// let index = NeighborIndex::build(["dog", "dig", "cat"]).unwrap();
    /// let stats = GraphStats::compute(&index);
    /// assert_eq!(stats.edges, 1);
    /// assert_eq!(stats.components, 2);
    /// ```
    #[must_use]
    pub fn compute(index: &NeighborIndex) -> Self {
        let degrees: Vec<usize> = (0..index.len())
            .into_par_iter()
            .map(|id| index.degree(id))
            .collect();

        let edges = degrees.iter().sum::<usize>() / 2;
        let isolated = degrees.iter().filter(|&&d| d == 0).count();

        // First word wins ties
        let (hub, &hub_degree) = degrees
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &d)| d)
            .unwrap_or((0, &0));

        let sizes = component_sizes(index);

        Self {
            words: index.len(),
            edges,
            isolated,
            max_degree: (index.word(hub).text().to_string(), hub_degree),
            components: sizes.len(),
            largest_component: sizes.iter().copied().max().unwrap_or(0),
        }
    }

    /// Mean number of neighbors per word
    #[must_use]
    pub fn average_degree(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        (2 * self.edges) as f64 / self.words as f64
    }
}

/// Sizes of all connected components, in order of their first word
fn component_sizes(index: &NeighborIndex) -> Vec<usize> {
    let mut seen = vec![false; index.len()];
    let mut sizes = Vec::new();

    for start in 0..index.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        let mut frontier: Vec<WordId> = vec![start];
        let mut size = 0;

        while !frontier.is_empty() {
            size += frontier.len();
            let mut next = Vec::new();
            for &id in &frontier {
                for neighbor in index.neighbor_ids(index.word(id).text()) {
                    if !seen[neighbor] {
                        seen[neighbor] = true;
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        sizes.push(size);
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_for_connected_sample() {
        let index = NeighborIndex::build([
            "dog", "dig", "dug", "dag", "dot", "cot", "cat", "cog", "cag",
        ])
        .unwrap();
        let stats = GraphStats::compute(&index);

        assert_eq!(stats.words, 9);
        assert_eq!(stats.components, 1);
        assert_eq!(stats.largest_component, 9);
        assert_eq!(stats.isolated, 0);
        assert_eq!(stats.max_degree, ("dog".to_string(), 5));
    }

    #[test]
    fn stats_count_edges_once() {
        // dog-dig, dig-dug, dog-dug form a triangle
        let index = NeighborIndex::build(["dog", "dig", "dug"]).unwrap();
        let stats = GraphStats::compute(&index);
        assert_eq!(stats.edges, 3);
        assert!((stats.average_degree() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_for_disconnected_graph() {
        let index = NeighborIndex::build(["dog", "dig", "cat", "xyz"]).unwrap();
        let stats = GraphStats::compute(&index);

        assert_eq!(stats.components, 3);
        assert_eq!(stats.largest_component, 2);
        assert_eq!(stats.isolated, 2);
        assert_eq!(stats.edges, 1);
    }

    #[test]
    fn max_degree_prefers_first_word_on_tie() {
        let index = NeighborIndex::build(["ab", "cd"]).unwrap();
        let stats = GraphStats::compute(&index);
        assert_eq!(stats.max_degree, ("ab".to_string(), 0));
    }
}
