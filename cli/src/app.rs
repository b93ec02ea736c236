use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use shieldsweep_core::{MineLayoutGenerator, Session, Turn};

use crate::render::Renderer;

/// How long hinted mines stay on screen.
pub const HINT_PAUSE: Duration = Duration::from_secs(3);

pub const PROMPT: &str = "Enter row and column (or 'S' for shield, 'H' for hint): ";
pub const INPUT_WARNING: &str = "Follow input requirements! e.g. 1 4";
pub const HINT_BANNER: &str = "Hint: Revealing some mines for 3 seconds!";

fn turn_message(turn: Turn) -> Option<&'static str> {
    match turn {
        Turn::Won => Some("You have won!"),
        Turn::ShieldArmed => Some("Shield activated! Avoiding the next mine."),
        Turn::ShieldUsed => Some("Shield used! You avoided the mine!"),
        Turn::Lost => Some("You hit a mine! Game over."),
        Turn::Invalid => Some("Invalid input. Try again."),
        Turn::Hint { .. } | Turn::Revealed(_) | Turn::AlreadyRevealed => None,
    }
}

/// Blocking terminal loop around a [`Session`].
pub struct App<G, R> {
    session: Session<G, R>,
    renderer: Renderer,
    hint_pause: Duration,
}

impl<G: MineLayoutGenerator, R: Rng> App<G, R> {
    pub fn new(session: Session<G, R>, renderer: Renderer) -> Self {
        Self {
            session,
            renderer,
            hint_pause: HINT_PAUSE,
        }
    }

    pub fn with_hint_pause(mut self, hint_pause: Duration) -> Self {
        self.hint_pause = hint_pause;
        self
    }

    pub fn session(&self) -> &Session<G, R> {
        &self.session
    }

    /// Plays until `input` runs out.
    pub fn run<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> anyhow::Result<()> {
        let Self {
            session,
            renderer,
            hint_pause,
        } = self;
        let mut status = None;
        let mut buf = Vec::new();

        loop {
            renderer
                .screen(out, session.engine(), status.take())
                .context("Could not draw the board")?;
            write!(out, "{PROMPT}")?;
            out.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Could not read player input")?;
            // end of input ends the session instead of spinning on the warning
            if read == 0 {
                writeln!(out)?;
                writeln!(out, "{INPUT_WARNING}")?;
                out.flush()?;
                log::info!("Input closed after {} games", session.games_started());
                return Ok(());
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                log::warn!("Ignoring input line that is not UTF-8");
                status = Some(INPUT_WARNING);
                continue;
            };

            let turn = session
                .handle_line(line.trim(), |engine| {
                    renderer.screen(out, engine, Some(HINT_BANNER))?;
                    out.flush()?;
                    if !hint_pause.is_zero() {
                        thread::sleep(*hint_pause);
                    }
                    Ok::<_, std::io::Error>(())
                })
                .context("Could not show hint")?;
            log::trace!("{:?} -> {:?}", line.trim(), turn);
            if turn.started_new_game() {
                log::debug!("Board {} dealt", session.games_started());
            }

            status = turn_message(turn);
        }
    }
}
