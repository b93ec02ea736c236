use super::*;

/// Hands out the same layout for every game, ignoring the requested config.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayout(pub MineLayout);

impl MineLayoutGenerator for FixedLayout {
    fn generate<R: Rng>(&self, config: GameConfig, _rng: &mut R) -> MineLayout {
        let (rows, cols) = self.0.size();
        if rows != config.size || cols != config.size || self.0.mine_count() != config.mines {
            log::warn!(
                "Fixed layout is {}x{} with {} mines, config asked for {}x{} with {}",
                rows,
                cols,
                self.0.mine_count(),
                config.size,
                config.size,
                config.mines
            );
        }
        self.0.clone()
    }
}
