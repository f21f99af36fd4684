//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! A word is an opaque sequence of symbols compared position by position.

mod pattern;
mod word;

pub use pattern::PatternKey;
pub use word::{Word, WordError, hamming_distance, symbol_count};
