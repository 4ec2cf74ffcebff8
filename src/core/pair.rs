//! Start/end word pair
//!
//! Holds the two endpoints of a ladder search. The pair is only constructible
//! when both words have equal length and are distinct, so downstream code can
//! rely on those properties without re-checking.

use super::word::Word;
use std::fmt;

/// Validated start and end words of a ladder search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    start: Word,
    end: Word,
}

/// Error type for invalid start/end combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    LengthMismatch { start: usize, end: usize },
    IdenticalWords,
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { start, end } => {
                write!(
                    f,
                    "Length of start word ({start}) is not equal to length of end word ({end})"
                )
            }
            Self::IdenticalWords => write!(f, "Start word is the same as end word"),
        }
    }
}

impl std::error::Error for PairError {}

impl WordPair {
    /// Create a validated pair of ladder endpoints
    ///
    /// # Errors
    /// Returns `PairError` if the words differ in length or are equal.
    pub fn new(start: Word, end: Word) -> Result<Self, PairError> {
        if start.len() != end.len() {
            return Err(PairError::LengthMismatch {
                start: start.len(),
                end: end.len(),
            });
        }

        if start == end {
            return Err(PairError::IdenticalWords);
        }

        Ok(Self { start, end })
    }

    /// Get the start word
    #[inline]
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    /// Get the end word
    #[inline]
    #[must_use]
    pub const fn end(&self) -> &Word {
        &self.end
    }

    /// Get the common length of both words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.start.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn pair_creation_valid() {
        let pair = WordPair::new(word("cat"), word("dog")).unwrap();
        assert_eq!(pair.start().text(), "cat");
        assert_eq!(pair.end().text(), "dog");
        assert_eq!(pair.len(), 3);
    }

    #[test]
    fn pair_creation_length_mismatch() {
        assert!(matches!(
            WordPair::new(word("cat"), word("goat")),
            Err(PairError::LengthMismatch { start: 3, end: 4 })
        ));
    }

    #[test]
    fn pair_creation_identical_words() {
        assert!(matches!(
            WordPair::new(word("cat"), word("cat")),
            Err(PairError::IdenticalWords)
        ));
    }

    #[test]
    fn pair_creation_identical_after_normalization() {
        // Case differences disappear during Word construction
        assert!(matches!(
            WordPair::new(word("CAT"), word("cat")),
            Err(PairError::IdenticalWords)
        ));
    }
}
