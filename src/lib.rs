//! Word Ladder
//!
//! Finds a shortest word ladder between two equal-length words: a sequence of
//! dictionary words in which consecutive words differ in exactly one position.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::graph::NeighborIndex;
//! use word_ladder::search::find_ladder;
//!
//! let index = NeighborIndex::build(["dog", "dig", "cog", "cag", "cat"]).unwrap();
//! let ladder = find_ladder(&index, "dog", "cat").unwrap();
//! assert_eq!(ladder.to_string(), "dog/cog/cag/cat");
//! ```

// Core domain types
pub mod core;

// Neighbor index and graph statistics
pub mod graph;

// Breadth-first ladder search
pub mod search;

// Word list loading
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
