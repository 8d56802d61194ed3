#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use state::*;
pub use types::*;
pub use view::*;

mod cell;
mod error;
mod generator;
mod scan;
mod state;
mod types;
mod view;

/// Board construction parameters, pre-clamped so generation is total.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Position,
    pub trap_density: f32,
}

impl GameConfig {
    /// Smallest playable axis; shorter requests are clamped up to this.
    pub const MIN_AXIS: Coord = 5;

    pub const DEFAULT_TRAP_DENSITY: f32 = 0.15;

    pub fn new((width, height): Position, trap_density: f32) -> Self {
        if width < Self::MIN_AXIS || height < Self::MIN_AXIS {
            log::warn!(
                "board {}x{} below minimum, clamping axes to {}",
                width,
                height,
                Self::MIN_AXIS
            );
        }
        Self {
            size: (width.max(Self::MIN_AXIS), height.max(Self::MIN_AXIS)),
            trap_density,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// `round(cells * density)`, held to at least one trap and at least one
    /// safe cell whatever the density.
    pub fn trap_count(&self) -> CellCount {
        let total = self.total_cells();
        let rounded = (f32::from(total) * self.trap_density + 0.5) as CellCount;
        rounded.clamp(1, total - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_short_axes_to_minimum() {
        let config = GameConfig::new((2, 40), 0.15);
        assert_eq!(config.size, (5, 40));

        let config = GameConfig::new((0, 0), 0.15);
        assert_eq!(config.size, (5, 5));
    }

    #[test]
    fn trap_count_rounds_the_density_product() {
        // 8 * 8 * 0.15 = 9.6
        let config = GameConfig::new((8, 8), 0.15);
        assert_eq!(config.trap_count(), 10);

        // 5 * 5 * 0.15 = 3.75
        let config = GameConfig::new((5, 5), 0.15);
        assert_eq!(config.trap_count(), 4);
    }

    #[test]
    fn trap_count_always_leaves_a_safe_cell_and_a_trap() {
        let config = GameConfig::new((5, 5), 0.0);
        assert_eq!(config.trap_count(), 1);

        let config = GameConfig::new((5, 5), -3.0);
        assert_eq!(config.trap_count(), 1);

        let config = GameConfig::new((5, 5), 1.0);
        assert_eq!(config.trap_count(), 24);

        let config = GameConfig::new((5, 5), 250.0);
        assert_eq!(config.trap_count(), 24);
    }
}
