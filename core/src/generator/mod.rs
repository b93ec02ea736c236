use crate::*;
use rand::Rng;

pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces the hidden mine board for a new game.
pub trait MineLayoutGenerator {
    fn generate<R: Rng>(&self, config: GameConfig, rng: &mut R) -> MineLayout;
}
