use rand::Rng;

use crate::*;

/// What a line of input did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Board was already cleared; a fresh game replaced it and the line was ignored.
    Won,
    ShieldArmed,
    /// A hint showed this many mines and has been cleared again.
    Hint { shown: usize },
    Revealed(CellCount),
    AlreadyRevealed,
    ShieldUsed,
    /// A mine went off; a fresh game replaced the board.
    Lost,
    Invalid,
}

impl Turn {
    /// Whether this turn threw the old board away.
    pub const fn started_new_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Running game plus everything needed to deal the next one.
#[derive(Debug)]
pub struct Session<G, R> {
    config: GameConfig,
    generator: G,
    rng: R,
    engine: PlayEngine,
    games_started: u32,
}

impl<G: MineLayoutGenerator, R: Rng> Session<G, R> {
    pub fn new(config: GameConfig, generator: G, mut rng: R) -> Self {
        let engine = PlayEngine::new(generator.generate(config, &mut rng));
        Self {
            config,
            generator,
            rng,
            engine,
            games_started: 1,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Replaces board, mine layout, remaining count and shield in one go.
    pub fn new_game(&mut self) {
        let layout = self.generator.generate(self.config, &mut self.rng);
        self.engine = PlayEngine::new(layout);
        self.games_started += 1;
        log::info!("Game {} started", self.games_started);
    }

    /// Runs one input cycle.
    ///
    /// A cleared board is reported as [`Turn::Won`] and reset before `line` is
    /// looked at, and `line` is then dropped. During a hint `pause` is called
    /// once with the mines on display; the board is restored when it returns,
    /// and an error from it is passed through after the restore.
    pub fn handle_line<E>(
        &mut self,
        line: &str,
        pause: impl FnOnce(&PlayEngine) -> core::result::Result<(), E>,
    ) -> core::result::Result<Turn, E> {
        if self.engine.is_cleared() {
            log::info!("Game {} won", self.games_started);
            self.new_game();
            return Ok(Turn::Won);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line, err);
                return Ok(Turn::Invalid);
            }
        };

        let turn = match command {
            Command::Hint => {
                let hint = self.engine.show_hint(&mut self.rng);
                let shown = hint.len();
                let paused = pause(&self.engine);
                self.engine.clear_hint(hint);
                paused?;
                Ok(Turn::Hint { shown })
            }
            Command::Shield => self.engine.arm_shield().map(|()| Turn::ShieldArmed),
            Command::Reveal(row, col) => self.reveal(row, col),
        };

        Ok(turn.unwrap_or_else(|err| {
            log::debug!("Rejected {:?}: {}", command, err);
            Turn::Invalid
        }))
    }

    fn reveal(&mut self, row: i64, col: i64) -> Result<Turn> {
        let coords = Command::coords_within(row, col, self.engine.size())?;
        Ok(match self.engine.reveal(coords)? {
            RevealOutcome::NoChange => Turn::AlreadyRevealed,
            RevealOutcome::Revealed(count) => Turn::Revealed(count),
            RevealOutcome::Shielded => Turn::ShieldUsed,
            RevealOutcome::HitMine => {
                log::info!("Game {} lost at {:?}", self.games_started, coords);
                self.new_game();
                Turn::Lost
            }
        })
    }
}
