//! Hangman game module
pub mod art;
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{GuessOutcome, HangmanGame, HangmanState};
pub use renderer::HangmanRenderer;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::engine::{read_line, Engine, Finished};
use crate::core::game::GameStatus;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};

/// Settings for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Skip the name prompt when set
    pub player_name: Option<String>,
    /// Deterministic word choice when set
    pub seed: Option<u64>,
    /// Pause between the greeting and the first turn
    pub pause: Duration,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            seed: None,
            pause: Duration::from_secs(1),
            color: true,
        }
    }
}

impl GameConfig {
    pub fn pick_word(&self) -> &'static str {
        match self.seed {
            Some(seed) => words::select_word_with(&mut StdRng::seed_from_u64(seed)),
            None => words::select_word(),
        }
    }
}

/// Play one game on stdin/stdout with a word from the dictionary.
pub fn play(config: &GameConfig) -> Result<GameStatus> {
    let word = config.pick_word();
    let mut input = io::stdin().lock();
    let mut ctx = TerminalContext::stdout(config.color);
    let finished = run_game(config, word, &mut input, &mut ctx)?;
    Ok(finished.status)
}

/// Setup, then the turn loop until the word is guessed or the lives run out.
pub fn run_game<I: BufRead, W: Write>(
    config: &GameConfig,
    word: &str,
    input: &mut I,
    ctx: &mut TerminalContext<W>,
) -> Result<Finished<HangmanState>> {
    ctx.print_colored_line("Welcome to Hangman!", TerminalColor::Cyan)?;

    let player_name = match &config.player_name {
        Some(name) => name.clone(),
        None => {
            ctx.print("Please enter your name: ")?;
            ctx.flush()?;
            read_line(input)?
                .ok_or_else(|| anyhow!("input closed before a name was entered"))?
                .trim()
                .to_string()
        }
    };

    ctx.print_line(&format!("Hello, {}. Guess the word!", player_name))?;
    ctx.flush()?;
    if !config.pause.is_zero() {
        thread::sleep(config.pause);
    }

    info!(letters = word.chars().count(), "new game");

    let state = HangmanState::new(word);
    let renderer = HangmanRenderer::new(player_name);
    let finished = Engine::<HangmanGame, _>::new(state, renderer).run(input, ctx)?;

    info!(
        status = ?finished.status,
        lives = finished.state.lives(),
        "game over"
    );
    Ok(finished)
}
