//! Terminal output formatting
//!
//! Display utilities for the line-oriented game and shared formatters.

pub mod display;
pub mod formatters;

pub use display::{print_farewell, print_loss, print_round_view, print_welcome, print_win};
