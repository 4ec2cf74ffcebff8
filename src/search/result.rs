//! Search outcome
//!
//! Carries the best chain found so far together with the endpoints and the
//! timeout interruption flag. "Not found" is an empty chain, not an error.

use crate::core::Word;

/// Result of a ladder search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    start_word: Word,
    end_word: Word,
    chain: Vec<Word>,
    interrupted_by_timeout: bool,
}

impl SearchOutcome {
    /// Create an empty outcome for the given endpoints
    #[must_use]
    pub(crate) const fn new(start_word: Word, end_word: Word) -> Self {
        Self {
            start_word,
            end_word,
            chain: Vec::new(),
            interrupted_by_timeout: false,
        }
    }

    /// Get the start word
    #[inline]
    #[must_use]
    pub const fn start_word(&self) -> &Word {
        &self.start_word
    }

    /// Get the end word
    #[inline]
    #[must_use]
    pub const fn end_word(&self) -> &Word {
        &self.end_word
    }

    /// Get the best chain found, empty meaning "not found"
    ///
    /// A non-empty chain begins with the start word and ends with the end word.
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &[Word] {
        &self.chain
    }

    /// Check if no chain was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Check if the search was cut short by the time budget
    #[inline]
    #[must_use]
    pub const fn is_interrupted_by_timeout(&self) -> bool {
        self.interrupted_by_timeout
    }

    /// Overwrite the recorded chain with a strictly shorter one
    pub(crate) fn record_chain(&mut self, chain: Vec<Word>) {
        debug_assert!(self.chain.is_empty() || chain.len() < self.chain.len());

        self.chain = chain;
    }

    /// Flag the outcome as interrupted by timeout
    pub(crate) const fn mark_interrupted(&mut self) {
        self.interrupted_by_timeout = true;
    }
}
