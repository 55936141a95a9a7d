use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement that keeps the start cell and its neighbours free of mines.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> MineLayout {
        let (size_x, size_y) = config.size;
        let mut layout = MineLayout::empty(config.size);

        let excluded = iter_neighbors(start, config.size).count() as CellCount + 1;
        let free_cells = config.total_cells().saturating_sub(excluded);
        let mines = if config.mines > free_cells {
            log::warn!(
                "Cannot fit {} mines outside the exclusion zone, placing {}",
                config.mines,
                free_cells
            );
            free_cells
        } else {
            config.mines
        };

        // rejection sampling, mines are at most cells - 9 so this never degenerates
        while layout.mine_count() < mines {
            let coords = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            if is_adjacent_or_same(start, coords) {
                continue;
            }
            layout.place_mine(coords);
        }

        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, mines: CellCount) -> GameConfig {
        GameConfig::new(size, mines).unwrap()
    }

    #[test]
    fn places_exact_count_outside_exclusion_zone() {
        let config = config((9, 9), 10);

        for seed in 0..64 {
            let layout = RandomMinefieldGenerator::new(seed).generate(&config, (4, 4));

            assert_eq!(layout.mine_count(), 10);
            assert!(layout.iter_mines().all(|pos| !is_adjacent_or_same((4, 4), pos)));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = config((16, 16), 40);

        let a = RandomMinefieldGenerator::new(7).generate(&config, (0, 0));
        let b = RandomMinefieldGenerator::new(7).generate(&config, (0, 0));

        assert_eq!(a, b);
    }

    #[test]
    fn dense_board_fills_everything_but_the_zone() {
        let config = config((9, 9), 72);

        let layout = RandomMinefieldGenerator::new(3).generate(&config, (4, 4));

        assert_eq!(layout.mine_count(), 72);
        for pos in iter_neighbors((4, 4), (9, 9)) {
            assert!(!layout.contains_mine(pos));
        }
        assert!(!layout.contains_mine((4, 4)));
    }

    #[test]
    fn corner_start_excludes_only_in_bounds_cells() {
        // corner zone holds 4 cells, so 81 - 4 mines still fit
        let config = GameConfig::new_unchecked((9, 9), 77);

        let layout = RandomMinefieldGenerator::new(11).generate(&config, (0, 0));

        assert_eq!(layout.mine_count(), 77);
        assert!(!layout.contains_mine((0, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn overfull_config_is_clamped() {
        let config = GameConfig::new_unchecked((3, 3), 5);

        let layout = RandomMinefieldGenerator::new(0).generate(&config, (1, 1));

        assert_eq!(layout.mine_count(), 0);
    }
}
