//! Hangman-specific renderer - injected dependency
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::art::gallows;
use crate::games::hangman::HangmanState;

const RULE_WIDTH: usize = 30;

pub struct HangmanRenderer {
    player_name: String,
}

impl HangmanRenderer {
    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}

/// Print the gallows for `lives`; values outside `0..=6` print nothing.
pub fn render_gallows<W: Write>(lives: i32, ctx: &mut TerminalContext<W>) -> io::Result<()> {
    match gallows(lives) {
        Some(art) => ctx.print_line(art),
        None => Ok(()),
    }
}

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn new(player_name: String) -> Self {
        Self { player_name }
    }

    /// Pure rendering function - no game logic
    fn render<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let failed: Vec<String> = state.failed().iter().map(char::to_string).collect();

        ctx.empty_line()?;
        ctx.print_line(&rule)?;
        render_gallows(i32::from(state.lives()), ctx)?;
        ctx.print_line(&format!("Word: {}", state.masked_word()))?;
        ctx.print_line(&format!("Lives left: {}", state.lives()))?;
        ctx.print_line(&format!("Wrong letters: {}", failed.join(", ")))?;
        ctx.print_line(&rule)
    }

    fn render_finished<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        if state.is_won() {
            ctx.print_colored_line(
                &format!(
                    "CONGRATULATIONS, {}! You guessed the word: {}",
                    self.player_name,
                    state.word()
                ),
                TerminalColor::Green,
            )
        } else {
            render_gallows(0, ctx)?;
            ctx.print_colored_line(
                &format!("Oh no, {}! You ran out of lives.", self.player_name),
                TerminalColor::Red,
            )?;
            ctx.print_line(&format!("The word was: {}", state.word()))
        }
    }
}
