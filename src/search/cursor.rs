//! Movable position over the candidate index
//!
//! A cursor is a plain position into the shared arena; it never borrows the
//! index, so any number of stack frames can reference the same index while
//! the engine mutates usage flags through it. Every operation takes the index
//! it was created over.

use super::candidates::{CandidateEntry, CandidateIndex};
use std::fmt;

/// Errors raised by invalid cursor construction or navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Index is empty or the requested start position is out of range
    InvalidCursor,
    /// Positional lookup outside `[0, len)`
    OutOfRange(usize),
    /// `next`/`previous` called at the corresponding boundary
    NoMoreElements,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCursor => write!(f, "Cursor requires a non-empty index and a valid position"),
            Self::OutOfRange(position) => write!(f, "Position {position} is out of range"),
            Self::NoMoreElements => write!(f, "Cursor is at the boundary of the index"),
        }
    }
}

impl std::error::Error for CursorError {}

/// A movable position over the ordered candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Create a cursor over `index` at `position`
    ///
    /// # Errors
    /// Returns `CursorError::InvalidCursor` if the index is empty or the
    /// position is not in `[0, len)`.
    pub fn new(index: &CandidateIndex, position: usize) -> Result<Self, CursorError> {
        if index.is_empty() || position >= index.len() {
            return Err(CursorError::InvalidCursor);
        }

        Ok(Self { position })
    }

    /// Get the current position
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the entry at the current position
    #[inline]
    #[must_use]
    pub fn current<'a>(&self, index: &'a CandidateIndex) -> &'a CandidateEntry {
        index.entry(self.position)
    }

    /// Get the entry at an arbitrary position
    ///
    /// # Errors
    /// Returns `CursorError::OutOfRange` if the position is invalid.
    pub fn at<'a>(
        &self,
        index: &'a CandidateIndex,
        position: usize,
    ) -> Result<&'a CandidateEntry, CursorError> {
        index.get(position).ok_or(CursorError::OutOfRange(position))
    }

    /// Check if the cursor can move forward
    #[inline]
    #[must_use]
    pub fn has_next(&self, index: &CandidateIndex) -> bool {
        self.position + 1 < index.len()
    }

    /// Check if the cursor can move backward
    #[inline]
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Advance to the next entry and return it
    ///
    /// # Errors
    /// Returns `CursorError::NoMoreElements` at the end of the index.
    pub fn next<'a>(&mut self, index: &'a CandidateIndex) -> Result<&'a CandidateEntry, CursorError> {
        if !self.has_next(index) {
            return Err(CursorError::NoMoreElements);
        }

        self.position += 1;
        Ok(index.entry(self.position))
    }

    /// Step back to the previous entry and return it
    ///
    /// # Errors
    /// Returns `CursorError::NoMoreElements` at the start of the index.
    pub fn previous<'a>(
        &mut self,
        index: &'a CandidateIndex,
    ) -> Result<&'a CandidateEntry, CursorError> {
        if !self.has_previous() {
            return Err(CursorError::NoMoreElements);
        }

        self.position -= 1;
        Ok(index.entry(self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rustc_hash::FxHashSet;

    fn index(words: &[&str], end: &str) -> CandidateIndex {
        let vocab: FxHashSet<Word> = words.iter().map(|w| Word::new(w).unwrap()).collect();
        CandidateIndex::build(&vocab, &Word::new("zzz").unwrap(), &Word::new(end).unwrap())
    }

    #[test]
    fn construction_over_empty_index_fails() {
        let empty = index(&[], "dog");
        assert_eq!(Cursor::new(&empty, 0), Err(CursorError::InvalidCursor));
    }

    #[test]
    fn construction_out_of_range_fails() {
        let idx = index(&["dog", "cog", "cot"], "dog");
        assert_eq!(Cursor::new(&idx, 3), Err(CursorError::InvalidCursor));
        assert_eq!(Cursor::new(&idx, 10), Err(CursorError::InvalidCursor));
    }

    #[test]
    fn construction_at_each_valid_position() {
        let idx = index(&["dog", "cog", "cot"], "dog");

        for position in 0..idx.len() {
            let cursor = Cursor::new(&idx, position).unwrap();
            assert_eq!(cursor.position(), position);
            assert_eq!(cursor.current(&idx), idx.entry(position));
        }
    }

    #[test]
    fn at_validates_position() {
        let idx = index(&["dog", "cog", "cot"], "dog");
        let cursor = Cursor::new(&idx, 0).unwrap();

        assert!(cursor.at(&idx, 2).is_ok());
        assert_eq!(cursor.at(&idx, 3).unwrap_err(), CursorError::OutOfRange(3));
    }

    #[test]
    fn forward_iteration_visits_every_entry() {
        let idx = index(&["dog", "cog", "cot", "dig"], "dog");
        let mut cursor = Cursor::new(&idx, 0).unwrap();

        assert!(!cursor.has_previous());

        let mut visited = vec![cursor.current(&idx).word().clone()];
        while cursor.has_next(&idx) {
            visited.push(cursor.next(&idx).unwrap().word().clone());
        }

        assert_eq!(visited.len(), idx.len());
        assert!(!cursor.has_next(&idx));
    }

    #[test]
    fn next_at_end_fails() {
        let idx = index(&["dog"], "dog");
        let mut cursor = Cursor::new(&idx, 0).unwrap();

        assert_eq!(cursor.next(&idx).unwrap_err(), CursorError::NoMoreElements);
        // Position is unchanged after a failed move
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn previous_at_start_fails() {
        let idx = index(&["dog"], "dog");
        let mut cursor = Cursor::new(&idx, 0).unwrap();

        assert_eq!(
            cursor.previous(&idx).unwrap_err(),
            CursorError::NoMoreElements
        );
    }

    #[test]
    fn backward_iteration_returns_to_start() {
        let idx = index(&["dog", "cog", "cot"], "dog");
        let mut cursor = Cursor::new(&idx, 2).unwrap();

        cursor.previous(&idx).unwrap();
        cursor.previous(&idx).unwrap();
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.has_previous());
    }
}
