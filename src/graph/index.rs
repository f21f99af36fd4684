//! Hamming-distance-1 neighbor index
//!
//! Every dictionary word is filed under each of its pattern keys. A neighbor
//! lookup for a word then only has to visit the buckets of its own keys, which
//! makes each query proportional to the word length and the bucket sizes rather
//! than to the size of the dictionary.

use crate::core::{PatternKey, Word, WordError, symbol_count};
use rustc_hash::FxHashMap;
use std::fmt;

/// Position of a word in the index's insertion order
pub type WordId = usize;

/// Errors raised while building or querying a [`NeighborIndex`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// No words were supplied
    EmptyDictionary,
    /// A zero-length word was supplied
    EmptyWord,
    /// Words of more than one length were supplied
    InconsistentWordLength {
        expected: usize,
        found: usize,
        word: String,
    },
    /// A query word does not have the dictionary's length
    InvalidWordLength { expected: usize, found: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary contains no words"),
            Self::EmptyWord => write!(f, "Dictionary contains an empty word"),
            Self::InconsistentWordLength {
                expected,
                found,
                word,
            } => write!(
                f,
                "Dictionary word '{word}' has {found} symbols, expected {expected}"
            ),
            Self::InvalidWordLength { expected, found } => {
                write!(f, "Word must have {expected} symbols, got {found}")
            }
        }
    }
}

impl std::error::Error for IndexError {}

impl From<WordError> for IndexError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::Empty => Self::EmptyWord,
        }
    }
}

/// Read-only index answering "which dictionary words are one edit away?"
///
/// Words keep the order in which they were first supplied; duplicates are
/// dropped. Neighbor lists are ordered by ascending wildcard position and then
/// by that insertion order, so every query is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    words: Vec<Word>,
    ids: FxHashMap<String, WordId>,
    buckets: FxHashMap<PatternKey, Vec<WordId>>,
    word_len: usize,
}

impl NeighborIndex {
    /// Build the index over a set of equal-length words
    ///
    /// # Errors
    ///
    /// - `IndexError::EmptyDictionary` if `words` yields nothing
    /// - `IndexError::EmptyWord` if any word is the empty string
    /// - `IndexError::InconsistentWordLength` if two words differ in length
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::NeighborIndex;
    ///
    /// let index = NeighborIndex::build(["dog", "dig", "cat"]).unwrap();
    /// assert_eq!(index.word_len(), 3);
    /// assert_eq!(index.neighbors("dog").unwrap(), vec!["dig"]);
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self {
            words: Vec::new(),
            ids: FxHashMap::default(),
            buckets: FxHashMap::default(),
            word_len: 0,
        };

        for text in words {
            let text = text.as_ref();
            if index.ids.contains_key(text) {
                continue;
            }

            let word = Word::new(text)?;
            if index.words.is_empty() {
                index.word_len = word.len();
            } else if word.len() != index.word_len {
                return Err(IndexError::InconsistentWordLength {
                    expected: index.word_len,
                    found: word.len(),
                    word: text.to_string(),
                });
            }

            let id = index.words.len();
            for key in word.pattern_keys() {
                index.buckets.entry(key).or_default().push(id);
            }
            index.ids.insert(text.to_string(), id);
            index.words.push(word);
        }

        if index.words.is_empty() {
            return Err(IndexError::EmptyDictionary);
        }

        Ok(index)
    }

    /// Symbol count shared by every word in the index
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an index cannot be built from zero words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check dictionary membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Look up the id of a dictionary word
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Word stored under `id`
    ///
    /// # Panics
    /// Panics if `id` was not produced by this index.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Iterate over all words in insertion order
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(Word::text)
    }

    /// Dictionary words at Hamming distance 1 from `word`
    ///
    /// `word` need not be a dictionary member.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InvalidWordLength` if `word` does not have the
    /// dictionary's length.
    pub fn neighbors(&self, word: &str) -> Result<Vec<&str>, IndexError> {
        let found = symbol_count(word);
        if found != self.word_len {
            return Err(IndexError::InvalidWordLength {
                expected: self.word_len,
                found,
            });
        }

        Ok(self.neighbor_ids(word).map(|id| self.words[id].text()).collect())
    }

    /// Number of neighbors of the dictionary word `id`
    #[must_use]
    pub fn degree(&self, id: WordId) -> usize {
        self.neighbor_ids(self.words[id].text()).count()
    }

    /// Ids of dictionary words one edit away from `word`
    ///
    /// Does not validate the length: a word of the wrong length shares no
    /// pattern key with the dictionary and so yields nothing.
    pub(crate) fn neighbor_ids<'a>(&'a self, word: &'a str) -> impl Iterator<Item = WordId> + 'a {
        let own_id = self.id_of(word);

        PatternKey::all(word)
            .filter_map(move |key| self.buckets.get(&key))
            .flat_map(|bucket| bucket.iter().copied())
            .filter(move |&id| Some(id) != own_id)
    }
}
