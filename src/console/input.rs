//! Line-based player input
//!
//! Prompts, reads a line, validates, and asks again until the line is
//! acceptable. Bad input never leaves this module.

use crate::core::Letter;
use crate::session::{GuessSource, ReplaySource};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const GUESS_PROMPT: &str = "Guess a letter: ";
pub const INVALID_GUESS: &str = "Invalid input! Please enter a single alphabetical character.";
pub const REPLAY_PROMPT: &str = "Play again? (y/n): ";
pub const INVALID_REPLAY: &str = "Please answer 'y' or 'n'.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized answer '{0}'")]
pub struct ReplayError(pub String);

/// Parse a replay answer: `y` to continue, `n` to stop, either case
///
/// # Errors
/// Returns `ReplayError` for anything else.
pub fn parse_replay(line: &str) -> Result<bool, ReplayError> {
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(ReplayError(answer.to_string()))
    }
}

/// Guess and replay source over any reader/writer pair
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Input from stdin, prompts to stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Show `prompt` and read one line
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }

    /// Keep prompting until `parse` accepts a line
    fn prompt_until<T, E: std::fmt::Display>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected input {line:?}: {e}");
                    writeln!(self.writer, "{}\n", rejection.bright_red())?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> GuessSource for ConsoleInput<R, W> {
    fn next_guess(&mut self) -> io::Result<Letter> {
        self.prompt_until(GUESS_PROMPT, INVALID_GUESS, Letter::parse)
    }
}

impl<R: BufRead, W: Write> ReplaySource for ConsoleInput<R, W> {
    fn play_again(&mut self) -> io::Result<bool> {
        self.prompt_until(REPLAY_PROMPT, INVALID_REPLAY, parse_replay)
    }
}
