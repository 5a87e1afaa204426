//! TUI application state and logic

use crate::assets::Vocabulary;
use crate::core::{GuessOutcome, Letter, Round, RoundStatus, StageTable};
use crate::session::{SessionStats, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, W> {
    pub vocabulary: &'a Vocabulary,
    pub words: W,
    pub round: Round<'a>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Every letter key is a guess
    Guessing,
    /// Round finished, waiting for y/n
    Replay,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, W: WordSource> App<'a, W> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, stages: &'a StageTable, mut words: W) -> Self {
        let secret = words.choose(vocabulary).clone();
        log::debug!("secret word selected: {secret}");

        Self {
            vocabulary,
            words,
            round: Round::new(secret, stages),
            input_mode: InputMode::Guessing,
            messages: vec![Message {
                text: "Welcome to Snowman Meltdown! Type a letter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: SessionStats::default(),
            should_quit: false,
        }
    }

    pub fn new_round(&mut self) {
        let secret = self.words.choose(self.vocabulary).clone();
        log::debug!("secret word selected: {secret}");

        self.round = Round::new(secret, self.round.stages());
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New round! A fresh snowman awaits.", MessageStyle::Info);
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        let KeyCode::Char(c) = key.code else {
            return;
        };

        match self.input_mode {
            InputMode::Guessing => self.handle_guess(c),
            InputMode::Replay => self.handle_replay(c),
        }
    }

    pub fn handle_guess(&mut self, c: char) {
        let letter = match Letter::try_from(c) {
            Ok(letter) => letter,
            Err(e) => {
                log::debug!("rejected key {c:?}: {e}");
                self.add_message(
                    "Invalid input! Please enter a single alphabetical character.",
                    MessageStyle::Error,
                );
                return;
            }
        };

        match self.round.evaluate(letter) {
            GuessOutcome::Hit => {
                self.add_message(&format!("Yes! '{letter}' is in the word."), MessageStyle::Info);
            }
            GuessOutcome::Repeat => {
                self.add_message(
                    &format!("'{letter}' is already revealed."),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Miss => {
                self.add_message(
                    &format!(
                        "No '{letter}'. The snowman melts... ({} left)",
                        self.round.remaining_mistakes()
                    ),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::RoundOver => return,
        }

        let status = self.round.status();
        match status {
            RoundStatus::Lost => self.add_message(
                &format!("Game over! The word was {}", self.round.secret()),
                MessageStyle::Error,
            ),
            RoundStatus::Won => self.add_message(
                "Congratulations, you saved the snowman!",
                MessageStyle::Success,
            ),
            RoundStatus::InProgress => return,
        }

        log::info!(
            "round {status:?}: '{}' with {} mistakes",
            self.round.secret(),
            self.round.mistakes()
        );
        self.stats.record(status);
        self.input_mode = InputMode::Replay;
        self.add_message("Play again? (y/n)", MessageStyle::Info);
    }

    pub fn handle_replay(&mut self, c: char) {
        match c.to_ascii_lowercase() {
            'y' => self.new_round(),
            'n' => self.should_quit = true,
            _ => self.add_message("Please answer 'y' or 'n'.", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<'_, W>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, W>,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::loader::words_from_slice;
    use crate::core::SecretWord;

    /// Always picks the word at the next index, wrapping around
    struct InOrder(usize);

    impl WordSource for InOrder {
        fn choose<'v>(&mut self, vocabulary: &'v Vocabulary) -> &'v SecretWord {
            let word = &vocabulary.words()[self.0 % vocabulary.len()];
            self.0 += 1;
            word
        }
    }

    fn setup() -> (Vocabulary, StageTable) {
        (
            Vocabulary::new(words_from_slice(&["git", "python"])).unwrap(),
            StageTable::new(["s0", "s1", "s2"]).unwrap(),
        )
    }

    fn press(app: &mut App<'_, InOrder>, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn starts_guessing_first_word() {
        let (vocabulary, stages) = setup();
        let app = App::new(&vocabulary, &stages, InOrder(0));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.secret().text(), "git");
        assert_eq!(app.round.render().reveal, "___");
    }

    #[test]
    fn uppercase_key_is_folded() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "G");
        assert_eq!(app.round.render().reveal, "g__");
    }

    #[test]
    fn non_letter_key_leaves_round_untouched() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "5 ");
        assert_eq!(app.round.mistakes(), 0);
        assert!(app.round.guessed_letters().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_switches_to_replay() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "git");
        assert_eq!(app.input_mode, InputMode::Replay);
        assert_eq!(app.stats.wins, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations, you saved the snowman!")
        );
    }

    #[test]
    fn losing_reveals_word() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "zz");
        assert_eq!(app.input_mode, InputMode::Replay);
        assert_eq!(app.stats.losses, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game over! The word was git")
        );
    }

    #[test]
    fn guesses_ignored_while_waiting_for_replay() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "zzq");
        assert_eq!(app.round.mistakes(), 2);
        assert_eq!(app.input_mode, InputMode::Replay);
        assert!(!app.should_quit);
    }

    #[test]
    fn smallest_stage_table_reaches_replay() {
        let vocabulary = Vocabulary::new(words_from_slice(&["git"])).unwrap();
        let stages = StageTable::new(["full", "gone"]).unwrap();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        assert_eq!(app.round.status(), RoundStatus::InProgress);

        press(&mut app, "z");
        assert_eq!(app.input_mode, InputMode::Replay);
        assert_eq!(app.stats.losses, 1);

        press(&mut app, "y");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn replay_yes_starts_fresh_round() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "gity");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.secret().text(), "python");
        assert_eq!(app.round.mistakes(), 0);
        assert_eq!(app.round.render().reveal, "______");
    }

    #[test]
    fn replay_no_quits() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        press(&mut app, "gitN");
        assert!(app.should_quit);
        assert_eq!(app.stats.rounds, 1);
    }

    #[test]
    fn escape_quits_any_time() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let (vocabulary, stages) = setup();
        let mut app = App::new(&vocabulary, &stages, InOrder(0));
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
