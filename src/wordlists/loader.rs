//! Vocabulary loading utilities
//!
//! Reads a word list file into the set the search engine consumes: lines are
//! trimmed and lowercased, and only valid words of the requested length are
//! kept.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary of `word_length`-letter words from a file
///
/// Lines that are empty, malformed or of a different length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::load_vocabulary;
///
/// let vocabulary = load_vocabulary("data/words.txt", 3).unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_vocabulary<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<FxHashSet<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(vocabulary_from_lines(content.lines(), word_length))
}

/// Build a vocabulary from string lines
///
/// # Examples
/// ```
/// use word_ladder::wordlists::vocabulary_from_lines;
///
/// let vocabulary = vocabulary_from_lines(["Cat", "dog", "goat"], 3);
/// assert_eq!(vocabulary.len(), 2);
/// ```
pub fn vocabulary_from_lines<I, S>(lines: I, word_length: usize) -> FxHashSet<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| word.len() == word_length)
        .collect()
}
