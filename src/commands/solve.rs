//! Ladder solving command
//!
//! Validates the raw inputs, loads the vocabulary and drives the search
//! engine, translating every failure into a human-readable message.

use crate::core::{Word, WordError, WordPair};
use crate::search::{SearchOutcome, search};
use crate::wordlists::load_vocabulary;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for one solve run
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    pub wordlist: PathBuf,
    pub max_chain_length: usize,
    pub timeout: Duration,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, end: String, wordlist: PathBuf) -> Self {
        Self {
            start,
            end,
            wordlist,
            max_chain_length: 20,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Result of one solve run
#[derive(Debug)]
pub struct SolveReport {
    pub outcome: SearchOutcome,
    pub vocabulary_size: usize,
    pub max_chain_length: usize,
    pub elapsed: Duration,
}

/// Solve a ladder from the raw configuration
///
/// # Errors
///
/// Returns an error message if:
/// - Either word is empty or malformed
/// - The words differ in length or are identical
/// - The wordlist file cannot be read
/// - The end word is not in the vocabulary
pub fn solve_ladder(config: &SolveConfig) -> Result<SolveReport, String> {
    let start = Word::new(&config.start).map_err(|e| describe_word_error("start", &e))?;
    let end = Word::new(&config.end).map_err(|e| describe_word_error("end", &e))?;

    let pair = WordPair::new(start, end).map_err(|e| e.to_string())?;

    let vocabulary = load_vocabulary(&config.wordlist, pair.len()).map_err(|e| {
        format!(
            "Failed to read vocabulary file {}: {e}",
            config.wordlist.display()
        )
    })?;

    let started = Instant::now();
    let outcome = search(&pair, &vocabulary, config.max_chain_length, config.timeout)
        .map_err(|e| e.to_string())?;

    Ok(SolveReport {
        outcome,
        vocabulary_size: vocabulary.len(),
        max_chain_length: config.max_chain_length,
        elapsed: started.elapsed(),
    })
}

fn describe_word_error(which: &str, error: &WordError) -> String {
    match error {
        WordError::Empty => format!("The {which} word is empty"),
        _ => format!("Invalid {which} word: {error}"),
    }
}
