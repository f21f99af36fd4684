//! Search error taxonomy

use std::fmt;

/// Which precondition of a ladder search was violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputViolation {
    EmptySource,
    EmptyTarget,
    LengthMismatch { source: usize, target: usize },
    DictionaryLengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "source word is empty"),
            Self::EmptyTarget => write!(f, "target word is empty"),
            Self::LengthMismatch { source, target } => write!(
                f,
                "source has {source} symbols but target has {target}"
            ),
            Self::DictionaryLengthMismatch { expected, found } => write!(
                f,
                "words have {found} symbols but the dictionary holds {expected}-symbol words"
            ),
        }
    }
}

/// Outcome of a ladder search that did not produce a ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The source/target pair cannot be searched
    InvalidInput(InputViolation),
    /// Source and target are not connected through the dictionary
    NoPathFound {
        source: String,
        target: String,
        /// Words reserved before the frontier ran dry, source included
        explored: usize,
        /// Deepest round that reserved anything
        depth: usize,
    },
}

impl SearchError {
    /// True for the ordinary "disconnected" outcome
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(violation) => write!(f, "Invalid input: {violation}"),
            Self::NoPathFound {
                source, target, ..
            } => write!(f, "No ladder connects '{source}' to '{target}'"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<InputViolation> for SearchError {
    fn from(violation: InputViolation) -> Self {
        Self::InvalidInput(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_violation() {
        let err = SearchError::from(InputViolation::LengthMismatch {
            source: 3,
            target: 2,
        });
        assert_eq!(
            err.to_string(),
            "Invalid input: source has 3 symbols but target has 2"
        );
        assert!(!err.is_no_path());
    }

    #[test]
    fn no_path_is_flagged() {
        let err = SearchError::NoPathFound {
            source: "dog".to_string(),
            target: "xyz".to_string(),
            explored: 9,
            depth: 3,
        };
        assert!(err.is_no_path());
        assert_eq!(err.to_string(), "No ladder connects 'dog' to 'xyz'");
    }
}
