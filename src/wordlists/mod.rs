//! Vocabulary sources for ladder solving

pub mod loader;

pub use loader::{load_vocabulary, vocabulary_from_lines};
