use super::*;

/// Places mines uniformly at random: pick a cell, retry if it already holds a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RejectionSampler;

impl MineLayoutGenerator for RejectionSampler {
    fn generate<R: Rng>(&self, config: GameConfig, rng: &mut R) -> MineLayout {
        let total_cells = config.total_cells();
        let dim = config.dim().to_nd_index();

        // optimize for full boards, rejection sampling would crawl
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Mine board already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::from_mine_mask(Array2::from_elem(dim, true));
        }

        let mut mines: Array2<bool> = Array2::default(dim);
        let mut placed: CellCount = 0;
        let mut rejected: usize = 0;
        while placed < config.mines {
            let coords: Coord2 = (
                rng.random_range(0..config.size),
                rng.random_range(0..config.size),
            );
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            placed += 1;
        }

        log::debug!(
            "Placed {} mines on a {}x{} board ({} rejected picks)",
            placed,
            config.size,
            config.size,
            rejected
        );
        MineLayout::from_mine_mask(mines)
    }
}
