//! Ladder result type

use crate::core::hamming_distance;
use std::fmt;

/// A shortest word ladder from source to target
///
/// Always holds at least one word. Consecutive words differ in exactly one
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    pub(crate) fn new(words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty(), "a ladder holds at least the source");
        Self { words }
    }

    /// Words from source to target, inclusive
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of single-symbol edits (one less than the word count)
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// Join the words with `separator`
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }

    /// Check that every consecutive pair is one edit apart
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| hamming_distance(&pair[0], &pair[1]) == Some(1))
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("/"))
    }
}
