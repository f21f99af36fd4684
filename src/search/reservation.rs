//! Global word reservations
//!
//! Each word is claimed at most once for the whole search. The first claim
//! fixes its parent and depth; later claims are refused. Since rounds are
//! processed in order, the first claim is also at the shortest distance.

use rustc_hash::FxHashMap;

/// A claimed word's discovery record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation<'a> {
    /// Frontier word that discovered this one (`None` for the source)
    pub parent: Option<&'a str>,
    /// Round in which the word was claimed
    pub depth: usize,
}

/// Arena of reservations keyed by word
#[derive(Debug, Default)]
pub struct Reservations<'a> {
    claims: FxHashMap<&'a str, Reservation<'a>>,
}

impl<'a> Reservations<'a> {
    /// Start a reservation map with `root` claimed at depth 0
    #[must_use]
    pub fn with_root(root: &'a str) -> Self {
        let mut claims = FxHashMap::default();
        claims.insert(
            root,
            Reservation {
                parent: None,
                depth: 0,
            },
        );
        Self { claims }
    }

    /// Claim `word` for `parent` at `depth`
    ///
    /// Returns `false` and leaves the existing claim untouched if `word` was
    /// already reserved.
    pub fn reserve(&mut self, word: &'a str, parent: &'a str, depth: usize) -> bool {
        if self.claims.contains_key(word) {
            return false;
        }
        self.claims.insert(
            word,
            Reservation {
                parent: Some(parent),
                depth,
            },
        );
        true
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Reservation<'a>> {
        self.claims.get(word)
    }

    #[must_use]
    pub fn is_reserved(&self, word: &str) -> bool {
        self.claims.contains_key(word)
    }

    /// Number of reserved words
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Follow parent links from `word` back to the root
    ///
    /// Returns the chain root-first, or `None` if `word` is not reserved.
    #[must_use]
    pub fn path_to(&self, word: &'a str) -> Option<Vec<&'a str>> {
        let mut path = vec![word];
        let mut current = self.claims.get(word)?;

        while let Some(parent) = current.parent {
            path.push(parent);
            current = self.claims.get(parent)?;
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_reserved_at_depth_zero() {
        let reservations = Reservations::with_root("dog");
        assert_eq!(
            reservations.get("dog"),
            Some(&Reservation {
                parent: None,
                depth: 0
            })
        );
        assert_eq!(reservations.len(), 1);
    }

    #[test]
    fn first_claim_wins() {
        let mut reservations = Reservations::with_root("dog");
        assert!(reservations.reserve("cog", "dog", 1));
        assert!(!reservations.reserve("cog", "dot", 1));
        assert!(!reservations.reserve("dog", "cog", 2));

        let claim = reservations.get("cog").unwrap();
        assert_eq!(claim.parent, Some("dog"));
        assert_eq!(claim.depth, 1);
    }

    #[test]
    fn path_follows_parents() {
        let mut reservations = Reservations::with_root("dog");
        reservations.reserve("cog", "dog", 1);
        reservations.reserve("cag", "cog", 2);
        reservations.reserve("cat", "cag", 3);

        assert_eq!(
            reservations.path_to("cat"),
            Some(vec!["dog", "cog", "cag", "cat"])
        );
        assert_eq!(reservations.path_to("dog"), Some(vec!["dog"]));
        assert_eq!(reservations.path_to("xyz"), None);
    }
}
