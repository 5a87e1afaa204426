//! Collaborators of the game session
//!
//! The session never touches the terminal or the RNG directly. Everything
//! that reads, prints or draws is one of these traits, so tests can script
//! a whole session in memory.

use crate::assets::Vocabulary;
use crate::core::{Letter, Round, RoundView, SecretWord};
use std::io;

use super::SessionStats;

/// Supplies the secret word for each new round
pub trait WordSource {
    /// Pick one word from the vocabulary
    fn choose<'v>(&mut self, vocabulary: &'v Vocabulary) -> &'v SecretWord;
}

/// Supplies one validated guess per turn
pub trait GuessSource {
    /// Block until the player enters a valid letter
    ///
    /// Malformed input is handled inside the implementation by asking again;
    /// it never surfaces as an error.
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn next_guess(&mut self) -> io::Result<Letter>;
}

/// Asks whether to start another round
pub trait ReplaySource {
    /// Block until the player answers yes (`true`) or no (`false`)
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn play_again(&mut self) -> io::Result<bool>;
}

/// Displays the game to the player
///
/// # Errors
/// Every method returns an I/O error if output cannot be written.
pub trait Renderer {
    /// Greeting shown once at the start of a session
    fn welcome(&mut self) -> io::Result<()>;

    /// Current stage image and reveal string
    fn show(&mut self, view: &RoundView) -> io::Result<()>;

    /// The round ended with every letter revealed
    fn won(&mut self, round: &Round<'_>) -> io::Result<()>;

    /// The round ended with the snowman fully melted
    fn lost(&mut self, round: &Round<'_>) -> io::Result<()>;

    /// Closing message with the session's tally
    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn welcome(&mut self) -> io::Result<()> {
        (**self).welcome()
    }

    fn show(&mut self, view: &RoundView) -> io::Result<()> {
        (**self).show(view)
    }

    fn won(&mut self, round: &Round<'_>) -> io::Result<()> {
        (**self).won(round)
    }

    fn lost(&mut self, round: &Round<'_>) -> io::Result<()> {
        (**self).lost(round)
    }

    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()> {
        (**self).farewell(stats)
    }
}
