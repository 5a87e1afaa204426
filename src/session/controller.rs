//! Game session controller
//!
//! Runs rounds back to back until the player declines another one.

use super::{GuessSource, Renderer, ReplaySource, WordSource};
use crate::assets::Vocabulary;
use crate::core::{Round, RoundStatus, SecretWord, StageTable};
use std::io;

/// Result of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub secret: SecretWord,
    pub status: RoundStatus,
    pub mistakes: usize,
}

/// Tally of the rounds played in one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
}

impl SessionStats {
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won => self.wins += 1,
            RoundStatus::Lost => self.losses += 1,
            RoundStatus::InProgress => return,
        }
        self.rounds += 1;
    }
}

/// Owns everything a session needs and drives the round loop
pub struct GameSession<'a, W, I, R> {
    vocabulary: &'a Vocabulary,
    stages: &'a StageTable,
    words: W,
    input: I,
    renderer: R,
    stats: SessionStats,
}

impl<'a, W, I, R> GameSession<'a, W, I, R>
where
    W: WordSource,
    I: GuessSource + ReplaySource,
    R: Renderer,
{
    #[must_use]
    pub fn new(
        vocabulary: &'a Vocabulary,
        stages: &'a StageTable,
        words: W,
        input: I,
        renderer: R,
    ) -> Self {
        Self {
            vocabulary,
            stages,
            words,
            input,
            renderer,
            stats: SessionStats::default(),
        }
    }

    /// Play rounds until the player answers no
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input or renderer fails. Malformed input
    /// is not an error.
    pub fn run(&mut self) -> io::Result<SessionStats> {
        self.renderer.welcome()?;

        loop {
            self.play_round()?;
            if !self.input.play_again()? {
                break;
            }
            log::debug!("starting another round");
        }

        log::info!(
            "session over: {} rounds, {} won, {} lost",
            self.stats.rounds,
            self.stats.wins,
            self.stats.losses
        );
        self.renderer.farewell(&self.stats)?;
        Ok(self.stats)
    }

    /// Play a single round from word selection to win or loss
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input or renderer fails.
    pub fn play_round(&mut self) -> io::Result<RoundSummary> {
        let secret = self.words.choose(self.vocabulary).clone();
        log::debug!("secret word selected: {secret}");

        let mut round = Round::new(secret, self.stages);

        let status = loop {
            self.renderer.show(&round.render())?;

            let letter = self.input.next_guess()?;
            round.evaluate(letter);

            if round.is_loss() {
                self.renderer.lost(&round)?;
                break RoundStatus::Lost;
            }
            if round.is_win() {
                self.renderer.won(&round)?;
                break RoundStatus::Won;
            }
        };

        log::info!(
            "round {status:?}: '{}' with {} mistakes",
            round.secret(),
            round.mistakes()
        );
        self.stats.record(status);

        Ok(RoundSummary {
            secret: round.secret().clone(),
            status,
            mistakes: round.mistakes(),
        })
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }
}
