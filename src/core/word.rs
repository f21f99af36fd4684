//! Word ladder word representation
//!
//! A Word stores its text along with its symbol count. Symbols are Unicode
//! scalar values and are compared by exact equality; no case folding happens here.

use super::PatternKey;
use std::fmt;

/// A non-empty dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one symbol"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text has no symbols.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("dog").unwrap();
    /// assert_eq!(word.text(), "dog");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let len = symbol_count(&text);

        if len == 0 {
            return Err(WordError::Empty);
        }

        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of symbols in the word
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Get the symbol at a specific position
    ///
    /// Returns `None` if `position >= len()`.
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Option<char> {
        self.text.chars().nth(position)
    }

    /// All pattern keys of this word, one per wildcard position
    ///
    /// Keys are yielded in ascending position order.
    pub fn pattern_keys(&self) -> impl Iterator<Item = PatternKey> + '_ {
        PatternKey::all(&self.text)
    }

    /// Check whether `other` differs from this word in exactly one position
    #[must_use]
    pub fn is_adjacent(&self, other: &str) -> bool {
        hamming_distance(&self.text, other) == Some(1)
    }
}

/// Count the symbols (not bytes) in `text`
#[inline]
#[must_use]
pub fn symbol_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of positions at which two equal-length words differ
///
/// Returns `None` if the words have different symbol counts.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("dog", "dig"), Some(1));
/// assert_eq!(hamming_distance("dog", "cat"), Some(3));
/// assert_eq!(hamming_distance("dog", "do"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if symbol_count(a) != symbol_count(b) {
        return None;
    }

    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.text(), "dog");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_case_is_preserved() {
        let word = Word::new("Dog").unwrap();
        assert_eq!(word.text(), "Dog");
        assert_ne!(word, Word::new("dog").unwrap());
    }

    #[test]
    fn word_len_counts_symbols_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.text().len(), 5);
    }

    #[test]
    fn word_symbol_at() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.symbol_at(0), Some('c'));
        assert_eq!(word.symbol_at(2), Some('t'));
        assert_eq!(word.symbol_at(3), None);
    }

    #[test]
    fn word_pattern_keys_one_per_position() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.pattern_keys().count(), 3);
    }

    #[test]
    fn word_adjacency() {
        let word = Word::new("dog").unwrap();
        assert!(word.is_adjacent("dig"));
        assert!(word.is_adjacent("cog"));
        assert!(!word.is_adjacent("dog")); // Same word
        assert!(!word.is_adjacent("cat")); // Three edits
        assert!(!word.is_adjacent("dogs")); // Different length
    }

    #[test]
    fn hamming_distance_unicode() {
        assert_eq!(hamming_distance("café", "cafe"), Some(1));
        assert_eq!(hamming_distance("", ""), Some(0));
    }

    #[test]
    fn word_display() {
        let word = Word::new("cot").unwrap();
        assert_eq!(format!("{word}"), "cot");
    }
}
