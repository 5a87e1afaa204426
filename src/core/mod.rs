//! Core domain types for the game
//!
//! This module contains the round state machine and the value types it is
//! built from. Nothing here performs I/O.

mod letter;
mod round;
mod secret;
mod stages;

pub use letter::{InputError, Letter};
pub use round::{GuessOutcome, HIDDEN, Round, RoundStatus, RoundView};
pub use secret::{SecretWord, WordError};
pub use stages::{StageTable, StageTableError};
