pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{ConsoleGame, GameStatus};
pub use crate::games::hangman::{run_game, GameConfig};
