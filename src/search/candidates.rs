//! Candidate word index
//!
//! The index is an arena of candidate entries built once per search: every
//! vocabulary word except the start word, tagged with its Hamming distance to
//! the end word. Entries closer to the target sort first, which is the
//! heuristic that biases the depth-first search toward short chains. After
//! construction only the `used` flags mutate, and only through the index.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// A vocabulary word annotated with search scratch state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    word: Word,
    distance_to_end: usize,
    used: bool,
}

impl CandidateEntry {
    /// Get the candidate word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Get the Hamming distance to the end word
    #[inline]
    #[must_use]
    pub const fn distance_to_end(&self) -> usize {
        self.distance_to_end
    }

    /// Check whether this word currently occupies a slot in the chain
    #[inline]
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.used
    }
}

/// Ordered arena of candidate entries shared by all stack frames
///
/// Cursors address entries by position only; they never hold references into
/// the arena, so flag mutation stays confined to `mark_used` / `clear_used`.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    entries: Vec<CandidateEntry>,
}

impl CandidateIndex {
    /// Build the index from the vocabulary
    ///
    /// Excludes any word literally equal to `start` and sorts ascending by
    /// `(distance_to_end, word)`; the lexicographic tie-break keeps the
    /// search order deterministic.
    #[must_use]
    pub fn build(vocabulary: &FxHashSet<Word>, start: &Word, end: &Word) -> Self {
        let mut entries: Vec<CandidateEntry> = vocabulary
            .iter()
            .filter(|word| *word != start)
            .map(|word| CandidateEntry {
                word: word.clone(),
                distance_to_end: word.distance(end),
                used: false,
            })
            .collect();

        entries.sort_by(|a, b| {
            a.distance_to_end
                .cmp(&b.distance_to_end)
                .then_with(|| a.word.cmp(&b.word))
        });

        Self { entries }
    }

    /// Get the number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a position
    ///
    /// # Panics
    /// Panics if `position >= len()`; cursors guarantee valid positions.
    #[inline]
    #[must_use]
    pub fn entry(&self, position: usize) -> &CandidateEntry {
        &self.entries[position]
    }

    /// Get the entry at a position, if valid
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CandidateEntry> {
        self.entries.get(position)
    }

    /// Mark the entry at a position as occupying a chain slot
    #[inline]
    pub fn mark_used(&mut self, position: usize) {
        self.entries[position].used = true;
    }

    /// Clear the usage flag of the entry at a position
    #[inline]
    pub fn clear_used(&mut self, position: usize) {
        self.entries[position].used = false;
    }

    /// Iterate over the entries in heuristic order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateEntry> {
        self.entries.iter()
    }
}
