use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs from a snapshot, with the ground truth held
/// back until the game has been lost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Position,
    pub trap_count: CellCount,
    pub cells: Array2<Cell>,
    pub game_over: bool,
    pub win: bool,
    pub dangers: Option<BTreeSet<Position>>,
}

impl BoardView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            size: state.size(),
            trap_count: state.trap_count(),
            cells: state.visible.clone(),
            game_over: state.game_over(),
            win: state.win(),
            dangers: state.danger_positions().cloned(),
        }
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cells[pos.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_state_mirrors_the_visible_layer() {
        let state = GameState::from_danger_coords((5, 5), &[(1, 1), (3, 1)])
            .unwrap()
            .scan((2, 2));

        let view = BoardView::from_state(&state);

        assert_eq!(view.size, (5, 5));
        assert_eq!(view.trap_count, 2);
        assert_eq!(view.cell_at((2, 2)), Cell::Adjacent(2));
        assert_eq!(view.cell_at((0, 0)), Cell::Hidden);
        assert_eq!(view.dangers, None);
    }

    #[test]
    fn dangers_appear_only_on_a_lost_board() {
        let state = GameState::from_danger_coords((5, 5), &[(1, 1)]).unwrap();

        let active = BoardView::from_state(&state);
        assert_eq!(active.dangers, None);

        let lost = BoardView::from_state(&state.scan((1, 1)));
        assert!(lost.game_over);
        assert_eq!(lost.dangers.unwrap().len(), 1);
    }
}
