use std::collections::HashSet;

use tracing::debug;

use crate::core::game::{ConsoleGame, Feedback, GameStatus};
use crate::core::terminal::TerminalColor;
use crate::games::hangman::art::MAX_LIVES;

/// Result of processing one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that is in the word
    Correct(char),
    /// New letter that is not in the word; the only outcome that costs a life
    Wrong(char),
    AlreadyCorrect(char),
    AlreadyWrong(char),
}

impl GuessOutcome {
    pub fn letter(self) -> char {
        match self {
            GuessOutcome::Correct(c)
            | GuessOutcome::Wrong(c)
            | GuessOutcome::AlreadyCorrect(c)
            | GuessOutcome::AlreadyWrong(c) => c,
        }
    }

    pub fn costs_life(self) -> bool {
        matches!(self, GuessOutcome::Wrong(_))
    }

    pub fn is_repeat(self) -> bool {
        matches!(self, GuessOutcome::AlreadyCorrect(_) | GuessOutcome::AlreadyWrong(_))
    }

    pub fn feedback(self) -> Feedback {
        match self {
            GuessOutcome::Correct(c) => {
                Feedback::new(format!("Well done! '{}' is in the word.", c), TerminalColor::Green)
            }
            GuessOutcome::Wrong(c) => {
                Feedback::new(format!("Wrong! '{}' is not in the word.", c), TerminalColor::Red)
            }
            GuessOutcome::AlreadyCorrect(c) => Feedback::new(
                format!("You already guessed '{}'. Try another one.", c),
                TerminalColor::Yellow,
            ),
            GuessOutcome::AlreadyWrong(c) => Feedback::new(
                format!("You already tried '{}' and it is wrong. Try another one.", c),
                TerminalColor::Yellow,
            ),
        }
    }
}

/// One game of hangman: the hidden word plus everything guessed so far
#[derive(Debug, Clone)]
pub struct HangmanState {
    word: String,
    guessed: HashSet<char>,
    failed: Vec<char>,
    lives: u8,
}

impl HangmanState {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            guessed: HashSet::new(),
            failed: Vec::new(),
            lives: MAX_LIVES,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn guessed(&self) -> &HashSet<char> {
        &self.guessed
    }

    /// Wrong letters in the order they were tried
    pub fn failed(&self) -> &[char] {
        &self.failed
    }

    /// Classify a letter against earlier guesses and the word, recording it if new.
    /// Repeats are reported and never recorded twice.
    pub fn process_guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_lowercase().next().unwrap_or(letter);

        if self.guessed.contains(&letter) {
            return GuessOutcome::AlreadyCorrect(letter);
        }
        if self.failed.contains(&letter) {
            return GuessOutcome::AlreadyWrong(letter);
        }

        if self.word.contains(letter) {
            self.guessed.insert(letter);
            GuessOutcome::Correct(letter)
        } else {
            self.failed.push(letter);
            GuessOutcome::Wrong(letter)
        }
    }

    /// Process a guess and take a life for a new wrong letter.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.process_guess(letter);
        if outcome.costs_life() {
            self.lives = self.lives.saturating_sub(1);
        }
        debug!(?outcome, lives = self.lives, "guess processed");
        outcome
    }

    /// Every distinct letter of the word has been guessed.
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// The word with unguessed letters as `_`, each character followed by a space.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .flat_map(|c| {
                let shown = if self.guessed.contains(&c) { c } else { '_' };
                [shown, ' ']
            })
            .collect()
    }
}

/// Pure game rules - no UI or I/O concerns
#[derive(Clone)]
pub struct HangmanGame;

impl ConsoleGame for HangmanGame {
    type State = HangmanState;
    type Input = char;

    const NAME: &'static str = "Hangman";
    const PROMPT: &'static str = "Enter a letter: ";
    const RETRY_MESSAGE: &'static str = "You didn't enter anything. Try again.";

    /// First character of the trimmed line; longer input is truncated.
    fn parse_line(line: &str) -> Option<char> {
        line.trim().chars().next()
    }

    fn handle_input(state: &mut HangmanState, letter: char) -> Feedback {
        state.guess(letter).feedback()
    }

    fn status(state: &HangmanState) -> GameStatus {
        state.status()
    }
}
