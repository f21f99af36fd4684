//! Neighbor listing command

use crate::graph::{IndexError, NeighborIndex};

/// Neighbors of a single word
pub struct NeighborsResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
}

/// List the dictionary words one edit away from `word`
///
/// # Errors
///
/// Returns `IndexError::InvalidWordLength` if `word` does not match the
/// dictionary's word length.
pub fn list_neighbors(word: &str, index: &NeighborIndex) -> Result<NeighborsResult, IndexError> {
    let neighbors = index
        .neighbors(word)?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(NeighborsResult {
        word: word.to_string(),
        in_dictionary: index.contains(word),
        neighbors,
    })
}
