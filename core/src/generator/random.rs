use alloc::collections::BTreeSet;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform generation strategy: `trap_count` distinct positions drawn
/// without replacement from the whole grid, driven by an explicit seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> GameState {
        let width = CellCount::from(config.size.0);
        let total = config.total_cells();
        let trap_count = config.trap_count();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let dangers: BTreeSet<Position> =
            rand::seq::index::sample(&mut rng, total.into(), trap_count.into())
                .into_iter()
                .map(|index| {
                    let index = index as CellCount;
                    ((index % width) as Coord, (index / width) as Coord)
                })
                .collect();

        log::debug!(
            "generated {}x{} board, {} traps, seed {}",
            config.size.0,
            config.size.1,
            trap_count,
            self.seed
        );

        GameState::assemble(config.size, dangers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_set_size_matches_the_trap_count() {
        for seed in 0..16 {
            let state = generate(8, 8, 0.15, seed);
            let traps = usize::from(state.trap_count());

            assert_eq!(state.hidden_cells_left(), 64);
            assert!(traps >= 1);
            assert!(traps <= 63);

            let mut on_layout = 0;
            for x in 0..8 {
                for y in 0..8 {
                    if state.hidden_at((x, y)) == Cell::Danger {
                        on_layout += 1;
                        assert!(state.dangers.contains(&(x, y)));
                    } else {
                        assert!(!state.dangers.contains(&(x, y)));
                    }
                }
            }
            assert_eq!(on_layout, traps);
            assert_eq!(state.dangers.len(), traps);
        }
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let first = generate(9, 7, 0.2, 42);
        let second = generate(9, 7, 0.2, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn undersized_boards_are_clamped_up() {
        let state = generate(1, 3, 0.15, 7);
        assert_eq!(state.size(), (5, 5));
    }

    #[test]
    fn extreme_densities_stay_playable() {
        let almost_full = generate(5, 5, 0.99, 3);
        assert_eq!(almost_full.trap_count(), 24);

        let nearly_empty = generate(5, 5, 0.001, 3);
        assert_eq!(nearly_empty.trap_count(), 1);
    }

    #[test]
    fn generated_states_start_non_terminal() {
        let state = generate(6, 6, 0.15, 11);
        assert!(!state.game_over());
        assert!(!state.win());
        assert!(!state.is_terminal());
    }
}
