//! Backtracking ladder search
//!
//! A heuristically-ordered, pruned depth-first search over the candidate
//! index. The chain under construction is a stack of cursors; each iteration
//! advances the top frame to the next usable word one character away from its
//! predecessor, extends the chain, records a completed ladder, or rolls back.
//! Recursion is replaced by the explicit frame stack, so chain length is
//! never bounded by call depth, and the wall-clock budget is polled once per
//! iteration.

use super::candidates::CandidateIndex;
use super::cursor::{Cursor, CursorError};
use super::result::SearchOutcome;
use super::stack::ChainStack;
use crate::core::{Word, WordPair};
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Errors surfaced by the search entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The end word is missing from the vocabulary; checked before any
    /// search work begins. The only recoverable domain error.
    EndWordNotInVocabulary,
    /// A cursor operation violated its precondition. This indicates a bug in
    /// the engine itself and is propagated rather than recovered from.
    Cursor(CursorError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndWordNotInVocabulary => write!(f, "End word is absent in vocabulary"),
            Self::Cursor(error) => write!(f, "Search invariant violated: {error}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<CursorError> for SearchError {
    fn from(error: CursorError) -> Self {
        Self::Cursor(error)
    }
}

/// Find the shortest ladder from `pair.start()` to `pair.end()`
///
/// Explores chains of up to `max_chain_length` words (endpoints included)
/// and stops early once `timeout` wall-clock time has elapsed, keeping the
/// best chain recorded so far. All "no chain" outcomes are encoded in the
/// returned [`SearchOutcome`], never as errors.
///
/// The vocabulary must already be filtered to words of the endpoints' length.
/// Preconditions: `max_chain_length >= 1` and a non-zero `timeout`.
///
/// # Errors
/// Returns [`SearchError::EndWordNotInVocabulary`] if the end word is not a
/// vocabulary member.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use word_ladder::core::{Word, WordPair};
/// use word_ladder::search::search;
///
/// let vocabulary = ["dog", "cog", "cot"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let pair = WordPair::new(Word::new("cat").unwrap(), Word::new("dog").unwrap()).unwrap();
///
/// let outcome = search(&pair, &vocabulary, 7, Duration::from_secs(60)).unwrap();
/// assert_eq!(outcome.chain().len(), 4);
/// ```
pub fn search(
    pair: &WordPair,
    vocabulary: &FxHashSet<Word>,
    max_chain_length: usize,
    timeout: Duration,
) -> Result<SearchOutcome, SearchError> {
    debug_assert!(max_chain_length >= 1);
    debug_assert!(!timeout.is_zero());

    if !vocabulary.contains(pair.end()) {
        return Err(SearchError::EndWordNotInVocabulary);
    }

    let index = CandidateIndex::build(vocabulary, pair.start(), pair.end());

    // The end word is in the vocabulary and differs from the start word, so
    // the index holds at least one entry.
    let mut engine = ChainSearch {
        pair,
        index,
        stack: ChainStack::new(),
        max_chain_length,
        timeout,
    };

    engine.run()
}

/// One search run over a single candidate index
///
/// Owns the index and the frame stack for the duration of the run; the
/// usage-flag invariant is that exactly the current entries of the frames on
/// the stack are marked used between iterations.
struct ChainSearch<'a> {
    pair: &'a WordPair,
    index: CandidateIndex,
    stack: ChainStack,
    max_chain_length: usize,
    timeout: Duration,
}

impl ChainSearch<'_> {
    /// Drive the search loop to exhaustion or timeout
    fn run(&mut self) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();

        let mut outcome = SearchOutcome::new(self.pair.start().clone(), self.pair.end().clone());

        // First frame, cursor at the heuristically best candidate.
        self.extend()?;

        let mut completed = false;

        while !completed {
            if self.advance_top()? {
                if self.beats_best(&outcome) {
                    if self.end_reached() {
                        outcome.record_chain(self.collect_chain());

                        // One step back would rebuild a chain of the same
                        // length from the same prefix; two steps force a
                        // change deeper in the prefix.
                        completed = !self.roll_back(2, true)?;
                    } else {
                        self.extend()?;
                    }
                } else {
                    // This branch cannot beat the best chain or the cap;
                    // retry the next candidate at the same position.
                    completed = !self.roll_back(1, true)?;
                }
            } else {
                // Top frame exhausted without acquiring a word, so its usage
                // flag stays untouched.
                completed = !self.roll_back(1, false)?;
            }

            if started.elapsed() >= self.timeout {
                outcome.mark_interrupted();
                completed = true;
            }
        }

        Ok(outcome)
    }

    /// Push a fresh frame with a cursor at position 0
    fn extend(&mut self) -> Result<(), CursorError> {
        let cursor = Cursor::new(&self.index, 0)?;
        self.stack.push(cursor);
        Ok(())
    }

    /// The chain word preceding the top frame: the start word at depth 1,
    /// else the word held by the frame below the top.
    fn previous_word(&self) -> &Word {
        let depth = self.stack.depth();

        if depth >= 2 {
            if let Some(frame) = self.stack.frame(depth - 2) {
                return frame.current(&self.index).word();
            }
        }

        self.pair.start()
    }

    /// Scan the top frame forward to the first unused entry exactly one
    /// character away from the previous chain word, marking it used.
    ///
    /// The scan is strictly forward: entries already passed are never
    /// revisited within one call. Returns false if the index is exhausted
    /// without a match.
    fn advance_top(&mut self) -> Result<bool, CursorError> {
        let previous = self.previous_word().clone();

        loop {
            let Some(position) = self.stack.top().map(Cursor::position) else {
                return Ok(false);
            };

            let entry = self.index.entry(position);

            if !entry.is_used() && previous.distance(entry.word()) == 1 {
                self.index.mark_used(position);
                return Ok(true);
            }

            match self.stack.top_mut() {
                Some(top) if top.has_next(&self.index) => {
                    top.next(&self.index)?;
                }
                _ => return Ok(false),
            }
        }
    }

    /// Check if the top frame holds the end word
    fn end_reached(&self) -> bool {
        self.stack
            .top()
            .is_some_and(|top| top.current(&self.index).word() == self.pair.end())
    }

    /// Optimality check: can the tentative chain still beat the cap and the
    /// best chain recorded so far?
    ///
    /// The tentative length counts the start word plus one word per frame;
    /// if the end word is not yet reached at least one more word is needed.
    fn beats_best(&self, outcome: &SearchOutcome) -> bool {
        let mut tentative_length = self.stack.depth() + 1;

        if !self.end_reached() {
            tentative_length += 1;
        }

        tentative_length <= self.max_chain_length
            && (outcome.is_empty() || tentative_length < outcome.chain().len())
    }

    /// Materialize the chain on the stack, start word first
    fn collect_chain(&self) -> Vec<Word> {
        let mut chain = Vec::with_capacity(self.stack.depth() + 1);
        chain.push(self.pair.start().clone());

        for frame in self.stack.iter() {
            let entry = frame.current(&self.index);
            debug_assert!(entry.is_used());

            chain.push(entry.word().clone());
        }

        chain
    }

    /// Undo at least `min_steps` frames, then retry the first frame below
    /// that still has candidates left.
    ///
    /// `clear_current_usage` controls whether the first popped frame's entry
    /// flag is cleared; deeper pops always clear, and an exhausted frame
    /// below the minimum forces clearing on for the rest of the cascade.
    /// Returns false when the stack empties: the search space is exhausted.
    fn roll_back(
        &mut self,
        min_steps: usize,
        mut clear_current_usage: bool,
    ) -> Result<bool, CursorError> {
        debug_assert!(min_steps >= 1);
        debug_assert!(!self.stack.is_empty());

        let mut remaining_steps = min_steps;

        loop {
            let Some(popped) = self.stack.pop() else {
                return Ok(false);
            };

            if remaining_steps > 0 {
                remaining_steps -= 1;
            }

            if clear_current_usage {
                self.index.clear_used(popped.position());
            }

            if self.stack.is_empty() {
                return Ok(false);
            }

            if remaining_steps == 0 {
                if let Some(top) = self.stack.top_mut() {
                    if top.has_next(&self.index) {
                        // The retried frame gives up its word before moving on.
                        self.index.clear_used(top.position());
                        top.next(&self.index)?;

                        return Ok(true);
                    }
                }

                // Frame below is exhausted too; keep cascading upward.
                clear_current_usage = true;
            } else {
                clear_current_usage = true;
            }
        }
    }
}
