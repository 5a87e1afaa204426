//! Full-screen terminal interface
//!
//! One key press per guess; the round logic is the same `Round` the classic
//! mode uses.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
