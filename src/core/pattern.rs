//! Wildcard pattern keys for neighbor lookup
//!
//! A pattern key is a word with one position blanked out. Two distinct words of
//! the same length share a pattern key exactly when they differ only at that
//! blanked position, i.e. when they are at Hamming distance 1.
//!
//! The key stores the blanked position alongside the remaining symbols, so no
//! dictionary symbol can collide with the wildcard.

/// A word with a single wildcard position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    wildcard: usize,
    rest: String,
}

impl PatternKey {
    /// Build the key for `text` with `wildcard` blanked out
    ///
    /// Returns `None` if `wildcard` is not a valid symbol position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::PatternKey;
    ///
    /// let a = PatternKey::new("dog", 1).unwrap();
    /// let b = PatternKey::new("dig", 1).unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(PatternKey::new("dog", 3).is_none());
    /// ```
    #[must_use]
    pub fn new(text: &str, wildcard: usize) -> Option<Self> {
        let mut rest = String::with_capacity(text.len());
        let mut found = false;

        for (i, ch) in text.chars().enumerate() {
            if i == wildcard {
                found = true;
            } else {
                rest.push(ch);
            }
        }

        found.then_some(Self { wildcard, rest })
    }

    /// All keys of `text`, in ascending wildcard position
    pub fn all(text: &str) -> impl Iterator<Item = Self> + '_ {
        let symbols: Vec<char> = text.chars().collect();

        (0..symbols.len()).map(move |wildcard| {
            let rest = symbols
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != wildcard)
                .map(|(_, &ch)| ch)
                .collect();
            Self { wildcard, rest }
        })
    }

    /// The blanked position
    #[inline]
    #[must_use]
    pub const fn wildcard(&self) -> usize {
        self.wildcard
    }
}

impl std::fmt::Display for PatternKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, ch) in self.rest.chars().enumerate() {
            if i == self.wildcard {
                write!(f, "_")?;
            }
            write!(f, "{ch}")?;
        }
        if self.wildcard == self.rest.chars().count() {
            write!(f, "_")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_share_exactly_one_key() {
        let dog: Vec<_> = PatternKey::all("dog").collect();
        let dig: Vec<_> = PatternKey::all("dig").collect();

        let shared = dog.iter().filter(|k| dig.contains(k)).count();
        assert_eq!(shared, 1);
        assert_eq!(dog[1], dig[1]);
    }

    #[test]
    fn distant_words_share_no_key() {
        let dog: Vec<_> = PatternKey::all("dog").collect();
        let cat: Vec<_> = PatternKey::all("cat").collect();
        assert!(dog.iter().all(|k| !cat.contains(k)));
    }

    #[test]
    fn position_is_part_of_key() {
        // Same remaining symbols, different blanked position
        let a = PatternKey::new("aab", 0).unwrap();
        let b = PatternKey::new("aba", 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn underscore_symbols_do_not_collide() {
        let a = PatternKey::new("a_b", 1).unwrap();
        let b = PatternKey::new("a_b", 0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn all_matches_new() {
        let keys: Vec<_> = PatternKey::all("cat").collect();
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(Some(key.clone()), PatternKey::new("cat", i));
            assert_eq!(key.wildcard(), i);
        }
    }

    #[test]
    fn display_shows_wildcard() {
        assert_eq!(PatternKey::new("dog", 0).unwrap().to_string(), "_og");
        assert_eq!(PatternKey::new("dog", 1).unwrap().to_string(), "d_g");
        assert_eq!(PatternKey::new("dog", 2).unwrap().to_string(), "do_");
    }
}
