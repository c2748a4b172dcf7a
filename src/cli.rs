use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::core::game::GameStatus;
use crate::games::hangman::{self, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "ahorcado")]
#[command(about = "🎩 Guess the hidden word one letter at a time before the gallows are complete")]
#[command(version)]
pub struct Cli {
    /// Player name (if not specified, you will be asked)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed for the word choice, for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pause after the greeting, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pause_ms: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            player_name: self.name.clone(),
            seed: self.seed,
            pause: Duration::from_millis(self.pause_ms),
            color: !self.no_color,
        }
    }
}

pub fn run_cli() -> Result<GameStatus> {
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");
    hangman::play(&cli.config())
}
