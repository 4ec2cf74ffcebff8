//! Ladder word representation
//!
//! A Word is a case-normalized dictionary word of arbitrary (but fixed per
//! puzzle) length, with Hamming distance as the chain-step metric.

use std::fmt;

/// A lowercase ASCII word used as a ladder chain element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Goat").unwrap();
    /// assert_eq!(word.text(), "goat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("g0at").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the word is empty (never true for a validated Word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hamming distance: count of positions where the two words differ
    ///
    /// Both words must have equal length; unequal lengths are a caller bug.
    #[must_use]
    pub fn distance(&self, other: &Self) -> usize {
        debug_assert_eq!(self.len(), other.len());

        self.text
            .bytes()
            .zip(other.text.bytes())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("goat").unwrap();
        assert_eq!(word.text(), "goat");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = Word::new("GOAT").unwrap();
        assert_eq!(word.text(), "goat");

        let word2 = Word::new("  GoAt \n").unwrap();
        assert_eq!(word2.text(), "goat");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("g0at").is_err()); // Number
        assert!(Word::new("go at").is_err()); // Interior space
        assert!(Word::new("goat!").is_err()); // Punctuation
    }

    #[test]
    fn distance_counts_differing_positions() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(cat.distance(&cot), 1);
        assert_eq!(cat.distance(&dog), 3);
        assert_eq!(cot.distance(&dog), 2);
    }

    #[test]
    fn distance_is_symmetric() {
        let lead = Word::new("lead").unwrap();
        let gold = Word::new("gold").unwrap();

        assert_eq!(lead.distance(&gold), gold.distance(&lead));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let word = Word::new("goad").unwrap();
        assert_eq!(word.distance(&word), 0);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let cig = Word::new("cig").unwrap();
        let cog = Word::new("cog").unwrap();
        let dig = Word::new("dig").unwrap();

        assert!(cig < cog);
        assert!(cog < dig);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Goat").unwrap();
        assert_eq!(format!("{word}"), "goat");
    }
}
