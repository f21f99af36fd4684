//! Word graph construction
//!
//! The implicit graph has one node per dictionary word and an edge between
//! every pair of words at Hamming distance 1.

mod index;
pub mod stats;

pub use index::{IndexError, NeighborIndex, WordId};
pub use stats::GraphStats;
