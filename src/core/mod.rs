//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod pair;
mod word;

pub use pair::{PairError, WordPair};
pub use word::{Word, WordError};
