//! Secret word representation
//!
//! A `SecretWord` stores the word to be guessed along with the set of its
//! distinct letters, which is all the win check needs.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The word a player is trying to reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<Letter>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters, got '{0}'")]
    InvalidCharacters(String),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use snowman_meltdown::core::SecretWord;
    ///
    /// let word = SecretWord::new("GitHub").unwrap();
    /// assert_eq!(word.text(), "github");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("snow man").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<FxHashSet<_>, _>>()
            .map_err(|_| WordError::InvalidCharacters(text.clone()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<Letter> {
        &self.letters
    }

    /// Iterate over the word's letters in order, duplicates included
    pub fn chars(&self) -> impl Iterator<Item = Letter> + '_ {
        // Every byte was validated as an ASCII letter on construction
        self.text.bytes().map(Letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
