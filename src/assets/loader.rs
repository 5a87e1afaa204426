//! Word list loading utilities
//!
//! Provides functions to load a vocabulary from a file or from embedded constants.

use super::{Vocabulary, VocabularyError};
use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Errors raised while loading a custom word list
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read word list: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Load a vocabulary from a file
///
/// One word per line. Blank lines and lines that are not a valid word are
/// skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Vocabulary` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use snowman_meltdown::assets::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content)?)
}

/// Parse the contents of a word list file
///
/// # Errors
///
/// Returns `VocabularyError::Empty` if no line holds a valid word.
pub fn parse_word_list(content: &str) -> Result<Vocabulary, VocabularyError> {
    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretWord::new(trimmed)
                    .inspect_err(|e| log::warn!("skipping word list entry: {e}"))
                    .ok()
            }
        })
        .collect();

    Vocabulary::new(words)
}

/// Convert embedded string slice to secret words
///
/// # Examples
/// ```
/// use snowman_meltdown::assets::loader::words_from_slice;
/// use snowman_meltdown::assets::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
