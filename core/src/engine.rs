use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell was already showing something.
    NoChange,
    /// This many cells went from unrevealed to revealed.
    Revealed(CellCount),
    /// A mine was hit and the shield absorbed it.
    Shielded,
    HitMine,
}

/// Mines put on display by [`PlayEngine::show_hint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintReveal {
    mines: Vec<Coord2>,
}

impl HintReveal {
    pub fn cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.mines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }
}

/// Largest number of mines a single hint shows.
pub const MAX_HINT_MINES: u8 = 3;

/// State of a single game: visible board, mine layout, remaining count and shield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    board: Array2<Token>,
    remaining: CellCount,
    shield: bool,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let remaining = mine_layout.total_cells();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            remaining,
            shield: false,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Unrevealed cells, mines included. Starts at the cell total.
    pub fn remaining(&self) -> CellCount {
        self.remaining
    }

    /// Unrevealed cells without a mine; zero means the board is cleared.
    pub fn hidden_safe_cells(&self) -> CellCount {
        self.remaining.saturating_sub(self.total_mines())
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == self.total_mines()
    }

    pub fn shield_active(&self) -> bool {
        self.shield
    }

    pub fn cell_at(&self, coords: Coord2) -> Token {
        self.board[coords.to_nd_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.mine_layout.validate_coords(coords)
    }

    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Token>> {
        self.board.rows().into_iter()
    }

    /// Arms the shield for the next mine hit. Arming twice is the same as once.
    pub fn arm_shield(&mut self) -> Result<()> {
        self.check_playing()?;
        self.shield = true;
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_playing()?;

        if self.mine_layout[coords] {
            return Ok(self.trigger_mine(coords));
        }

        if !self.cell_at(coords).is_unrevealed() {
            return Ok(RevealOutcome::NoChange);
        }

        let revealed = self.flood_reveal(coords);
        log::trace!("Revealed {} cells from {:?}", revealed, coords);
        Ok(RevealOutcome::Revealed(revealed))
    }

    fn trigger_mine(&mut self, coords: Coord2) -> RevealOutcome {
        if self.shield {
            self.shield = false;
            self.board[coords.to_nd_index()] = Token::Shielded;
            log::debug!("Shield absorbed mine at {:?}", coords);
            RevealOutcome::Shielded
        } else {
            self.state = EngineState::Lost;
            log::debug!("Hit mine at {:?}", coords);
            RevealOutcome::HitMine
        }
    }

    /// Opens `start` and every cell reachable from it through zero-count cells.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut revealed: CellCount = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !self.cell_at(coords).is_unrevealed() {
                continue;
            }

            let adjacent_mines = self.mine_layout.adjacent_mine_count(coords);
            self.board[coords.to_nd_index()] = Token::Revealed(adjacent_mines);
            self.remaining -= 1;
            revealed += 1;

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.cell_at(pos).is_unrevealed()),
                );
            }
        }

        if self.is_cleared() {
            self.state = EngineState::Won;
        }
        revealed
    }

    /// Puts between one and [`MAX_HINT_MINES`] random mines on display.
    ///
    /// Each pick is a random cell, retried until it lands on a mine not already
    /// picked for this hint. With fewer mines than the drawn hint size every mine
    /// is shown once.
    pub fn show_hint<R: Rng>(&mut self, rng: &mut R) -> HintReveal {
        let wanted = rng.random_range(1..=MAX_HINT_MINES);
        let available = self.total_mines();
        let (rows, cols) = self.size();
        let mut mines: Vec<Coord2> = Vec::new();

        if CellCount::from(wanted) >= available {
            mines.extend(self.mine_layout.iter_mines());
        } else {
            while mines.len() < usize::from(wanted) {
                let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
                if self.mine_layout[coords] && !mines.contains(&coords) {
                    mines.push(coords);
                }
            }
        }

        for &coords in &mines {
            self.board[coords.to_nd_index()] = Token::Hint;
        }
        log::debug!("Hint shows {} of {} requested mines", mines.len(), wanted);
        HintReveal { mines }
    }

    /// Turns the hinted cells back into the unrevealed marker.
    ///
    /// A mine the shield had marked loses its `S` here.
    pub fn clear_hint(&mut self, hint: HintReveal) {
        for coords in hint.mines {
            self.board[coords.to_nd_index()] = Token::Unrevealed;
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
