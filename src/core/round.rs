//! Round state machine
//!
//! A `Round` is created with a freshly drawn secret word and zeroed counters,
//! mutated only by [`Round::evaluate`], and dropped once it is won or lost.
//! Mistakes and guessed letters only ever grow.

use super::{Letter, SecretWord, StageTable};
use rustc_hash::FxHashSet;

/// Placeholder shown for letters not yet revealed
pub const HIDDEN: char = '_';

/// Where a round stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Effect of a single guess on the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word and was newly revealed
    Hit,
    /// Letter is in the word and had already been revealed
    Repeat,
    /// Letter is not in the word; one more mistake
    Miss,
    /// The round had already ended; nothing changed
    RoundOver,
}

/// What the renderer shows for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Stage image at the current mistake count
    pub stage: String,
    /// One character per secret character, hidden ones as [`HIDDEN`]
    pub reveal: String,
}

/// State of one play-through
#[derive(Debug, Clone)]
pub struct Round<'a> {
    stages: &'a StageTable,
    secret: SecretWord,
    mistakes: usize,
    guessed: FxHashSet<Letter>,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(secret: SecretWord, stages: &'a StageTable) -> Self {
        Self {
            stages,
            secret,
            mistakes: 0,
            guessed: FxHashSet::default(),
        }
    }

    /// Apply one guess
    ///
    /// A correct letter is recorded once; guessing it again changes nothing.
    /// A wrong letter always costs a mistake, even if it was guessed before.
    ///
    /// # Examples
    /// ```
    /// use snowman_meltdown::core::{GuessOutcome, Letter, Round, SecretWord, StageTable};
    ///
    /// let stages = StageTable::new(["a", "b", "c", "d", "e"]).unwrap();
    /// let mut round = Round::new(SecretWord::new("git").unwrap(), &stages);
    ///
    /// let z = Letter::parse("z").unwrap();
    /// assert_eq!(round.evaluate(z), GuessOutcome::Miss);
    /// assert_eq!(round.evaluate(z), GuessOutcome::Miss);
    /// assert_eq!(round.mistakes(), 2);
    /// ```
    pub fn evaluate(&mut self, letter: Letter) -> GuessOutcome {
        if self.status().is_over() {
            return GuessOutcome::RoundOver;
        }

        let outcome = if !self.secret.contains(letter) {
            self.mistakes += 1;
            GuessOutcome::Miss
        } else if self.guessed.insert(letter) {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Repeat
        };

        log::trace!(
            "guess '{letter}' -> {outcome:?} ({}/{} mistakes)",
            self.mistakes,
            self.max_mistakes()
        );
        outcome
    }

    /// True once the mistake count reaches the stage table's limit
    #[inline]
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.mistakes == self.max_mistakes()
    }

    /// True once every distinct letter of the secret word has been guessed
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.secret.letters().is_subset(&self.guessed)
    }

    /// Current status; a loss takes precedence over a win
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_loss() {
            RoundStatus::Lost
        } else if self.is_win() {
            RoundStatus::Won
        } else {
            RoundStatus::InProgress
        }
    }

    /// Build the display payload for the current state
    ///
    /// # Examples
    /// ```
    /// use snowman_meltdown::core::{Letter, Round, SecretWord, StageTable};
    ///
    /// let stages = StageTable::new(["full", "melted"]).unwrap();
    /// let mut round = Round::new(SecretWord::new("git").unwrap(), &stages);
    /// round.evaluate(Letter::parse("g").unwrap());
    /// round.evaluate(Letter::parse("t").unwrap());
    ///
    /// let view = round.render();
    /// assert_eq!(view.stage, "full");
    /// assert_eq!(view.reveal, "g_t");
    /// ```
    #[must_use]
    pub fn render(&self) -> RoundView {
        let reveal = self
            .secret
            .chars()
            .map(|letter| {
                if self.guessed.contains(&letter) {
                    letter.as_char()
                } else {
                    HIDDEN
                }
            })
            .collect();

        RoundView {
            stage: self.stages.stage(self.mistakes).to_string(),
            reveal,
        }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> usize {
        self.mistakes
    }

    #[inline]
    #[must_use]
    pub fn max_mistakes(&self) -> usize {
        self.stages.max_mistakes()
    }

    #[inline]
    #[must_use]
    pub fn remaining_mistakes(&self) -> usize {
        self.max_mistakes() - self.mistakes
    }

    #[inline]
    #[must_use]
    pub const fn stages(&self) -> &'a StageTable {
        self.stages
    }

    /// Correctly guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_stages() -> StageTable {
        StageTable::new(["s0", "s1", "s2", "s3", "s4"]).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn round<'a>(word: &str, stages: &'a StageTable) -> Round<'a> {
        Round::new(SecretWord::new(word).unwrap(), stages)
    }

    #[test]
    fn new_round_starts_empty() {
        let stages = five_stages();
        let round = round("python", &stages);
        assert_eq!(round.mistakes(), 0);
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.remaining_mistakes(), 4);
    }

    #[test]
    fn correct_guess_recorded() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        assert_eq!(round.evaluate(letter('i')), GuessOutcome::Hit);
        assert_eq!(round.guessed_letters(), vec![letter('i')]);
        assert_eq!(round.mistakes(), 0);
    }

    #[test]
    fn repeated_correct_guess_is_idempotent() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        round.evaluate(letter('g'));
        assert_eq!(round.evaluate(letter('g')), GuessOutcome::Repeat);
        assert_eq!(round.guessed_letters(), vec![letter('g')]);
        assert_eq!(round.mistakes(), 0);
    }

    #[test]
    fn repeated_wrong_guess_counts_again() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        assert_eq!(round.evaluate(letter('z')), GuessOutcome::Miss);
        assert_eq!(round.evaluate(letter('z')), GuessOutcome::Miss);
        assert_eq!(round.mistakes(), 2);
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn win_after_all_distinct_letters_any_order() {
        let stages = five_stages();
        for order in [['g', 'i', 't'], ['t', 'g', 'i'], ['i', 't', 'g']] {
            let mut round = round("git", &stages);
            round.evaluate(letter(order[0]));
            round.evaluate(letter(order[1]));
            assert_eq!(round.status(), RoundStatus::InProgress);
            round.evaluate(letter(order[2]));
            assert_eq!(round.status(), RoundStatus::Won);
        }
    }

    #[test]
    fn duplicate_letters_need_one_guess() {
        let stages = five_stages();
        let mut round = round("github", &stages);
        for c in ['g', 'i', 't', 'h', 'u', 'b'] {
            round.evaluate(letter(c));
        }
        assert!(round.is_win());
    }

    #[test]
    fn loss_at_exactly_max_mistakes() {
        let stages = five_stages();
        let mut round = round("python", &stages);
        for (i, c) in ['a', 'b', 'c', 'd'].into_iter().enumerate() {
            assert!(!round.is_loss(), "lost too early after {i} mistakes");
            round.evaluate(letter(c));
        }
        assert!(round.is_loss());
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.mistakes(), 4);
        assert_eq!(round.secret().text(), "python");
    }

    #[test]
    fn finished_round_ignores_further_guesses() {
        let stages = StageTable::new(["full", "gone"]).unwrap();
        let mut round = round("git", &stages);
        round.evaluate(letter('x'));
        assert!(round.is_loss());

        assert_eq!(round.evaluate(letter('y')), GuessOutcome::RoundOver);
        assert_eq!(round.evaluate(letter('g')), GuessOutcome::RoundOver);
        assert_eq!(round.mistakes(), 1);
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn mistakes_and_guesses_are_monotonic() {
        let stages = five_stages();
        let mut round = round("meltdown", &stages);
        let mut last_mistakes = 0;
        let mut last_guessed = Vec::new();

        for c in "mzelqtzdown".chars() {
            round.evaluate(letter(c));
            let guessed = round.guessed_letters();

            assert!(round.mistakes() >= last_mistakes);
            assert!(round.mistakes() <= round.max_mistakes());
            assert!(last_guessed.iter().all(|l| guessed.contains(l)));

            last_mistakes = round.mistakes();
            last_guessed = guessed;
        }
    }

    #[test]
    fn render_reveals_in_order() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        round.evaluate(letter('g'));
        round.evaluate(letter('t'));

        let view = round.render();
        assert_eq!(view.reveal, "g_t");
        assert_eq!(view.stage, "s0");
    }

    #[test]
    fn render_tracks_stage_by_mistakes() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        round.evaluate(letter('x'));
        round.evaluate(letter('y'));
        assert_eq!(round.render().stage, "s2");
    }

    #[test]
    fn render_repeats_duplicate_letters() {
        let stages = five_stages();
        let mut round = round("snowman", &stages);
        round.evaluate(letter('n'));
        assert_eq!(round.render().reveal, "_n____n");
    }

    #[test]
    fn render_does_not_mutate() {
        let stages = five_stages();
        let mut round = round("git", &stages);
        round.evaluate(letter('q'));
        let first = round.render();
        let second = round.render();
        assert_eq!(first, second);
        assert_eq!(round.mistakes(), 1);
    }
}
