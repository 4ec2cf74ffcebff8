//! Stack of chain-building cursors
//!
//! One frame per tentative chain position beyond the start word; depth equals
//! the current chain length minus one. Frames are pushed and popped at the
//! tail as the search extends and rolls back.

use super::cursor::Cursor;

/// Ordered sequence of cursors representing the chain under construction
#[derive(Debug, Default)]
pub struct ChainStack {
    frames: Vec<Cursor>,
}

impl ChainStack {
    /// Create an empty stack
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Get the current depth (number of frames)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if the stack has no frames
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Push a frame at the tail
    #[inline]
    pub fn push(&mut self, cursor: Cursor) {
        self.frames.push(cursor);
    }

    /// Pop the tail frame
    #[inline]
    pub fn pop(&mut self) -> Option<Cursor> {
        self.frames.pop()
    }

    /// Get the tail frame
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<&Cursor> {
        self.frames.last()
    }

    /// Get the tail frame mutably
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Cursor> {
        self.frames.last_mut()
    }

    /// Get the frame at a depth index (0 = oldest)
    #[inline]
    #[must_use]
    pub fn frame(&self, depth: usize) -> Option<&Cursor> {
        self.frames.get(depth)
    }

    /// Iterate over the frames from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Cursor> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::search::candidates::CandidateIndex;
    use rustc_hash::FxHashSet;

    fn index() -> CandidateIndex {
        let vocab: FxHashSet<Word> = ["dog", "cog", "cot"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        CandidateIndex::build(&vocab, &Word::new("cat").unwrap(), &Word::new("dog").unwrap())
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = ChainStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.depth(), 0);
        assert!(stack.top().is_none());
    }

    #[test]
    fn push_and_pop_are_lifo() {
        let idx = index();
        let mut stack = ChainStack::new();

        stack.push(Cursor::new(&idx, 0).unwrap());
        stack.push(Cursor::new(&idx, 2).unwrap());
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().unwrap().position(), 2);

        assert_eq!(stack.pop().unwrap().position(), 2);
        assert_eq!(stack.pop().unwrap().position(), 0);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn frame_addresses_from_oldest() {
        let idx = index();
        let mut stack = ChainStack::new();

        stack.push(Cursor::new(&idx, 1).unwrap());
        stack.push(Cursor::new(&idx, 2).unwrap());

        assert_eq!(stack.frame(0).unwrap().position(), 1);
        assert_eq!(stack.frame(1).unwrap().position(), 2);
        assert!(stack.frame(2).is_none());
    }

    #[test]
    fn top_mut_moves_tail_frame() {
        let idx = index();
        let mut stack = ChainStack::new();
        stack.push(Cursor::new(&idx, 0).unwrap());

        stack.top_mut().unwrap().next(&idx).unwrap();
        assert_eq!(stack.top().unwrap().position(), 1);
    }
}
