//! Ladder search engine
//!
//! Candidate index, cursor stack and the backtracking loop that together
//! find the shortest chain between two words.

pub mod candidates;
pub mod cursor;
mod engine;
mod result;
pub mod stack;

pub use candidates::{CandidateEntry, CandidateIndex};
pub use cursor::{Cursor, CursorError};
pub use engine::{SearchError, search};
pub use result::SearchOutcome;
pub use stack::ChainStack;
