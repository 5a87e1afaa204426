//! Display functions for the line-oriented game

use super::formatters::{mistake_bar, spaced_reveal};
use crate::core::{Round, RoundView};
use crate::session::SessionStats;
use colored::Colorize;
use std::io::{self, Write};

/// Print the greeting shown at the start of a session
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "    Welcome to Snowman Meltdown!".bright_white().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "Guess the word one letter at a time before the snowman melts.")
}

/// Print the current stage and the word progress
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_view(out: &mut impl Write, view: &RoundView) -> io::Result<()> {
    writeln!(out, "{}", view.stage.bright_cyan())?;
    writeln!(out, "Word:  {}", spaced_reveal(&view.reveal).bold())?;
    writeln!(out)
}

/// Print the victory message
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_win(out: &mut impl Write, round: &Round<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", "Congratulations, you saved the snowman!".bright_green().bold())?;
    writeln!(
        out,
        "The word was {} ({} of {} mistakes: {})",
        round.secret().text().bright_yellow().bold(),
        round.mistakes(),
        round.max_mistakes(),
        mistake_bar(round.mistakes(), round.max_mistakes())
    )
}

/// Print the defeat message followed by the fully melted stage
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_loss(out: &mut impl Write, round: &Round<'_>) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "Game over! The word was".bright_red().bold(),
        round.secret().text().bright_yellow().bold()
    )?;
    writeln!(out, "{}", round.stages().final_stage().bright_cyan())
}

/// Print the closing tally
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_farewell(out: &mut impl Write, stats: &SessionStats) -> io::Result<()> {
    let noun = if stats.rounds == 1 {
        "snowman"
    } else {
        "snowmen"
    };
    writeln!(out)?;
    writeln!(
        out,
        "You saved {} of {} {noun}.",
        stats.wins.to_string().bright_green().bold(),
        stats.rounds
    )?;
    writeln!(out, "Thanks for playing!")
}
