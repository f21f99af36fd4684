//! Word list loading utilities
//!
//! Provides functions to load word lists from files or in-memory slices,
//! keeping only the words of one length.

use crate::core::symbol_count;
use std::fs;
use std::io;
use std::path::Path;

/// How raw word list entries are filtered and normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep only words with this many symbols
    pub word_len: usize,
    /// Lowercase every entry before filtering
    pub lowercase: bool,
}

impl LoadOptions {
    #[must_use]
    pub const fn new(word_len: usize) -> Self {
        Self {
            word_len,
            lowercase: true,
        }
    }

    #[must_use]
    pub const fn keep_case(mut self) -> Self {
        self.lowercase = false;
        self
    }

    /// Normalize one raw entry, or `None` if it should be skipped
    fn accept(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let word = if self.lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        (symbol_count(&word) == self.word_len).then_some(word)
    }
}

/// Load words from a file
///
/// Returns the accepted words in file order. Duplicates are kept; the neighbor
/// index collapses them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::{LoadOptions, load_from_file};
///
/// let words = load_from_file("/usr/share/dict/words", LoadOptions::new(4)).unwrap();
/// println!("Loaded {} four-letter words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, options: LoadOptions) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = filter_lines(content.lines(), options);

    log::debug!(
        "loaded {} words of length {} from {}",
        words.len(),
        options.word_len,
        path.display()
    );

    Ok(words)
}

/// Apply the same filtering to an in-memory word list
///
/// # Examples
/// ```
/// use word_ladder::dictionary::{LoadOptions, words_from_slice};
///
/// let words = words_from_slice(&["Dog", "cats", "cot"], LoadOptions::new(3));
/// assert_eq!(words, vec!["dog", "cot"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], options: LoadOptions) -> Vec<String> {
    filter_lines(slice.iter().copied(), options)
}

fn filter_lines<'a>(lines: impl Iterator<Item = &'a str>, options: LoadOptions) -> Vec<String> {
    lines.filter_map(|line| options.accept(line)).collect()
}
