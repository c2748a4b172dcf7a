use std::io::{BufRead, Write};
use std::marker::PhantomData;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::core::game::{ConsoleGame, GameStatus};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;

/// Result of a game that ran to completion
#[derive(Debug)]
pub struct Finished<S> {
    pub status: GameStatus,
    pub state: S,
}

/// Blocking turn loop: render, prompt, read one line, apply it, check status.
pub struct Engine<G: ConsoleGame, R: GameRenderer<G::State>> {
    state: G::State,
    renderer: R,
    _phantom: PhantomData<G>,
}

impl<G: ConsoleGame, R: GameRenderer<G::State>> Engine<G, R> {
    pub fn new(state: G::State, renderer: R) -> Self {
        Self {
            state,
            renderer,
            _phantom: PhantomData,
        }
    }

    pub fn run<I: BufRead, W: Write>(
        mut self,
        input: &mut I,
        ctx: &mut TerminalContext<W>,
    ) -> Result<Finished<G::State>> {
        let mut turns = 0usize;

        loop {
            self.renderer.render(&self.state, ctx)?;
            ctx.print(G::PROMPT)?;
            ctx.flush()?;

            let line = read_line(input)?
                .ok_or_else(|| anyhow!("input closed before the game finished"))?;

            let Some(parsed) = G::parse_line(&line) else {
                ctx.print_line(G::RETRY_MESSAGE)?;
                continue;
            };

            turns += 1;
            let feedback = G::handle_input(&mut self.state, parsed);
            ctx.print_colored_line(&feedback.message, feedback.color)?;

            let status = G::status(&self.state);
            if status.is_finished() {
                debug!(game = G::NAME, ?status, turns, "game finished");
                self.renderer.render_finished(&self.state, ctx)?;
                ctx.flush()?;
                return Ok(Finished {
                    status,
                    state: self.state,
                });
            }
        }
    }
}

/// Read one line without its line ending. `None` once the input is exhausted.
pub fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
