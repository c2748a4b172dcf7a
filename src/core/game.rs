//! Core game interface for turn-based console games
use crate::core::terminal::TerminalColor;

/// Where a game stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Message shown to the player after an input has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub color: TerminalColor,
}

impl Feedback {
    pub fn new(message: impl Into<String>, color: TerminalColor) -> Self {
        Self { message: message.into(), color }
    }
}

/// Main game trait that all console games implement.
/// Games own their rules and input parsing; the engine owns the turn loop and I/O.
pub trait ConsoleGame {
    /// Game state, owned by the engine for the whole game
    type State;

    /// One parsed player input
    type Input;

    const NAME: &'static str;

    /// Prompt printed before each line of input
    const PROMPT: &'static str;

    /// Printed when a line does not parse into an input; the turn is retried
    const RETRY_MESSAGE: &'static str;

    /// Game developer controls input parsing - `None` means "ask again"
    fn parse_line(line: &str) -> Option<Self::Input>;

    /// Update state based on player input
    fn handle_input(state: &mut Self::State, input: Self::Input) -> Feedback;

    fn status(state: &Self::State) -> GameStatus;
}
