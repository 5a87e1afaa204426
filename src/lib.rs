//! Snowman Meltdown
//!
//! A terminal word-guessing game. Each wrong letter melts the snowman a little
//! more; reveal the whole word before it is gone.
//!
//! # Quick Start
//!
//! ```rust
//! use snowman_meltdown::assets::snowman_stages;
//! use snowman_meltdown::core::{Letter, Round, RoundStatus, SecretWord};
//!
//! let stages = snowman_stages();
//! let mut round = Round::new(SecretWord::new("git").unwrap(), &stages);
//!
//! for guess in ["g", "i", "t"] {
//!     round.evaluate(Letter::parse(guess).unwrap());
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Embedded words and artwork
pub mod assets;

// Session controller and its ports
pub mod session;

// Classic line-based game
pub mod console;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
