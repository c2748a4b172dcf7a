//! Generic game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Renderer for a console game's state - the engine calls it, never the game
pub trait GameRenderer<State> {
    /// Create a new renderer instance with injected dependencies
    fn new(player_name: String) -> Self
    where
        Self: Sized;

    /// Draw the state at the start of a turn, before input is requested
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Draw the final screen once the game has been won or lost
    fn render_finished<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
