//! Classic line-oriented terminal game
//!
//! Prompts on stdout, reads whole lines from stdin.

pub mod input;
mod renderer;

pub use input::{ConsoleInput, ReplayError, parse_replay};
pub use renderer::ConsoleRenderer;

use crate::assets::Vocabulary;
use crate::core::StageTable;
use crate::session::{GameSession, SessionStats, WordSource};
use std::io;

/// Run the classic game on stdin/stdout
///
/// # Errors
///
/// Returns an error if stdin is closed or stdout cannot be written.
pub fn run_classic<W: WordSource>(
    vocabulary: &Vocabulary,
    stages: &StageTable,
    words: W,
) -> io::Result<SessionStats> {
    let mut session = GameSession::new(
        vocabulary,
        stages,
        words,
        ConsoleInput::stdio(),
        ConsoleRenderer::stdout(),
    );
    session.run()
}
