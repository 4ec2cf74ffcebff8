//! Word Ladder Solver
//!
//! Finds the shortest chain of equal-length dictionary words from a start
//! word to an end word, each step changing exactly one character, using a
//! heuristically-ordered backtracking search with a length cap and a
//! wall-clock time budget.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use word_ladder::core::{Word, WordPair};
//! use word_ladder::search::search;
//!
//! let vocabulary = ["dog", "cog", "cot"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let pair = WordPair::new(Word::new("cat").unwrap(), Word::new("dog").unwrap()).unwrap();
//!
//! let outcome = search(&pair, &vocabulary, 7, Duration::from_secs(60)).unwrap();
//! assert_eq!(outcome.chain().len(), 4); // cat -> cot -> cog -> dog
//! ```

// Core domain types
pub mod core;

// Backtracking search engine
pub mod search;

// Vocabulary sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
