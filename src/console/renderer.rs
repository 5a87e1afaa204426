//! Line-based renderer

use crate::core::{Round, RoundView};
use crate::output::{print_farewell, print_loss, print_round_view, print_welcome, print_win};
use crate::session::{Renderer, SessionStats};
use std::io::{self, Write};

/// Renderer writing plain lines to any writer
pub struct ConsoleRenderer<W> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn welcome(&mut self) -> io::Result<()> {
        print_welcome(&mut self.out)
    }

    fn show(&mut self, view: &RoundView) -> io::Result<()> {
        print_round_view(&mut self.out, view)
    }

    fn won(&mut self, round: &Round<'_>) -> io::Result<()> {
        print_win(&mut self.out, round)
    }

    fn lost(&mut self, round: &Round<'_>) -> io::Result<()> {
        print_loss(&mut self.out, round)
    }

    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()> {
        print_farewell(&mut self.out, stats)?;
        self.out.flush()
    }
}
