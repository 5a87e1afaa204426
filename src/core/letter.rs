//! Single-letter guesses
//!
//! A `Letter` is the only thing a player ever submits during a round. Parsing
//! a raw input line into a `Letter` is the whole of guess validation.

use std::fmt;
use thiserror::Error;

/// One ASCII lowercase letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(pub(super) u8);

/// Reasons a line of input is not a valid guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected exactly one character, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not an alphabetical character")]
    NotAlphabetic(char),
}

impl Letter {
    /// Parse a line of player input into a guess
    ///
    /// The trailing line terminator is ignored; everything else counts toward
    /// the length, so `" a"` is rejected just like `"ab"`.
    ///
    /// # Errors
    /// Returns `InputError` if the line is not exactly one ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use snowman_meltdown::core::Letter;
    ///
    /// assert_eq!(Letter::parse("Q\n").unwrap().as_char(), 'q');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("5").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim_end_matches(['\r', '\n']);

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InputError::WrongLength(line.chars().count())),
        }
    }

    /// Get the letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the letter as an ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(InputError::NotAlphabetic(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_lowercase() {
        assert_eq!(Letter::parse("g").unwrap().as_char(), 'g');
    }

    #[test]
    fn parse_folds_uppercase() {
        assert_eq!(Letter::parse("G").unwrap().as_char(), 'g');
    }

    #[test]
    fn parse_strips_line_terminator() {
        assert_eq!(Letter::parse("t\n").unwrap().as_char(), 't');
        assert_eq!(Letter::parse("t\r\n").unwrap().as_char(), 't');
    }

    #[test]
    fn parse_rejects_multiple_characters() {
        assert_eq!(Letter::parse("ab"), Err(InputError::WrongLength(2)));
        assert_eq!(Letter::parse(" a"), Err(InputError::WrongLength(2)));
    }

    #[test]
    fn parse_rejects_empty_line() {
        assert_eq!(Letter::parse(""), Err(InputError::WrongLength(0)));
        assert_eq!(Letter::parse("\n"), Err(InputError::WrongLength(0)));
    }

    #[test]
    fn parse_rejects_digits_and_punctuation() {
        assert_eq!(Letter::parse("5"), Err(InputError::NotAlphabetic('5')));
        assert_eq!(Letter::parse("?"), Err(InputError::NotAlphabetic('?')));
        assert_eq!(Letter::parse(" "), Err(InputError::NotAlphabetic(' ')));
    }

    #[test]
    fn parse_rejects_non_ascii_letters() {
        assert_eq!(Letter::parse("é"), Err(InputError::NotAlphabetic('é')));
    }

    #[test]
    fn letters_order_alphabetically() {
        let a = Letter::try_from('a').unwrap();
        let z = Letter::try_from('Z').unwrap();
        assert!(a < z);
        assert_eq!(z.as_byte(), b'z');
    }

    #[test]
    fn letter_display() {
        let letter = Letter::try_from('K').unwrap();
        assert_eq!(format!("{letter}"), "k");
    }
}
