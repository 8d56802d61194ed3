use crate::*;
pub use random::*;

mod random;

/// Strategy for producing the opening snapshot of a game.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> GameState;
}

/// Generates a fresh board with uniform trap placement.
///
/// `width` and `height` are clamped to a minimum of 5, `trap_density` to
/// whatever leaves at least one trap and one safe cell. The same seed always
/// yields the same board.
pub fn generate(width: Coord, height: Coord, trap_density: f32, seed: u64) -> GameState {
    RandomBoardGenerator::new(seed).generate(GameConfig::new((width, height), trap_density))
}
