use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable snapshot of a game.
///
/// Transitions never mutate a snapshot in place; [`GameState::scan`] derives
/// the successor through [`GameState::with_updates`], copying any layout it
/// writes to. The hidden layout and the danger set are fixed for the
/// lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) size: Position,
    pub(crate) trap_count: CellCount,
    pub(crate) hidden: Array2<Cell>,
    pub(crate) visible: Array2<Cell>,
    pub(crate) dangers: BTreeSet<Position>,
    pub(crate) game_over: bool,
    pub(crate) win: bool,
}

/// Field overrides for [`GameState::with_updates`].
///
/// Lists only the fields that can legally change after generation.
#[derive(Clone, Debug, Default)]
pub struct StateUpdate {
    pub visible: Option<Array2<Cell>>,
    pub game_over: Option<bool>,
    pub win: Option<bool>,
}

impl GameState {
    /// Builds a fresh state from an explicit danger set.
    ///
    /// Meant for hand-constructed boards; the generator samples its own
    /// danger set and skips the validation.
    pub fn from_danger_coords(size: Position, danger_coords: &[Position]) -> Result<Self> {
        let mut dangers = BTreeSet::new();
        for &pos in danger_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            dangers.insert(pos);
        }

        let total = mult(size.0, size.1);
        let trap_count = dangers.len();
        if trap_count == 0 || trap_count >= usize::from(total) {
            return Err(GameError::InvalidTrapCount);
        }

        Ok(Self::assemble(size, dangers))
    }

    /// Assembles a non-terminal snapshot around a danger set that is already
    /// known to be in bounds and of valid cardinality: the hidden layout gets
    /// its adjacency counts, the visible layout starts fully unrevealed.
    pub(crate) fn assemble(size: Position, dangers: BTreeSet<Position>) -> Self {
        let mut hidden = Array2::from_elem(size.to_nd_index(), Cell::Empty);
        for &pos in &dangers {
            hidden[pos.to_nd_index()] = Cell::Danger;
        }
        for x in 0..size.0 {
            for y in 0..size.1 {
                let pos = (x, y);
                if dangers.contains(&pos) {
                    continue;
                }
                let count = neighbors(pos, size)
                    .filter(|adjacent| dangers.contains(adjacent))
                    .count()
                    .try_into()
                    .unwrap();
                hidden[pos.to_nd_index()] = Cell::from_adjacent_count(count);
            }
        }

        Self {
            size,
            trap_count: dangers.len().try_into().unwrap(),
            hidden,
            visible: Array2::default(size.to_nd_index()),
            dangers,
            game_over: false,
            win: false,
        }
    }

    /// The sole mutation primitive: a copy of `self` with the named fields
    /// overridden. The receiver is left untouched.
    pub fn with_updates(&self, updates: StateUpdate) -> Self {
        let mut next = self.clone();
        if let Some(visible) = updates.visible {
            next.visible = visible;
        }
        if let Some(game_over) = updates.game_over {
            next.game_over = game_over;
        }
        if let Some(win) = updates.win {
            next.win = win;
        }
        next
    }

    pub fn size(&self) -> Position {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn trap_count(&self) -> CellCount {
        self.trap_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn win(&self) -> bool {
        self.win
    }

    /// True once either terminal flag is set; the driving loop must stop
    /// advancing such a state.
    pub fn is_terminal(&self) -> bool {
        self.game_over || self.win
    }

    /// Player-visible content at `pos`.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.visible[pos.to_nd_index()]
    }

    /// Number of cells still unrevealed on the visible layer. The game is
    /// won when this drops to the trap count.
    pub fn hidden_cells_left(&self) -> CellCount {
        self.visible
            .iter()
            .filter(|cell| cell.is_hidden())
            .count()
            .try_into()
            .unwrap()
    }

    /// End-of-game disclosure: the trap locations, available only once the
    /// game has been lost.
    pub fn danger_positions(&self) -> Option<&BTreeSet<Position>> {
        self.game_over.then_some(&self.dangers)
    }

    pub(crate) fn hidden_at(&self, pos: Position) -> Cell {
        self.hidden[pos.to_nd_index()]
    }
}
