use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;

use crate::*;

impl GameState {
    /// Applies a player scan at `target`, producing the successor snapshot.
    ///
    /// Total over all inputs: out-of-bounds targets and already-revealed
    /// cells come back as a value-equal copy of `self` rather than an error.
    pub fn scan(&self, target: (i32, i32)) -> GameState {
        let Some(pos) = self.target_position(target) else {
            return self.clone();
        };
        if !self.cell_at(pos).is_hidden() {
            return self.clone();
        }

        // Danger check runs strictly before any win accounting, so a lost
        // snapshot never carries the win flag as well.
        if self.dangers.contains(&pos) {
            let mut visible = self.visible.clone();
            visible[pos.to_nd_index()] = Cell::Danger;
            return self.with_updates(StateUpdate {
                visible: Some(visible),
                game_over: Some(true),
                ..Default::default()
            });
        }

        let mut visible = self.visible.clone();
        visible[pos.to_nd_index()] = self.hidden_at(pos);
        if self.hidden_at(pos) == Cell::Empty {
            self.expand_empty_region(&mut visible, pos);
        }

        let won = count_hidden(&visible) == self.dangers.len();
        self.with_updates(StateUpdate {
            visible: Some(visible),
            win: won.then_some(true),
            ..Default::default()
        })
    }

    /// Flood fill over 8-neighbor adjacency, starting from a just-revealed
    /// zero-count cell. The frontier only grows out of `Empty` cells, so a
    /// danger can never enter it; the visited set bounds the walk to one
    /// visit per cell.
    fn expand_empty_region(&self, visible: &mut Array2<Cell>, start: Position) {
        let mut visited = BTreeSet::from([start]);
        let mut frontier: VecDeque<Position> = neighbors(start, self.size)
            .filter(|&pos| visible[pos.to_nd_index()].is_hidden())
            .collect();

        while let Some(pos) = frontier.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            if !visible[pos.to_nd_index()].is_hidden() {
                continue;
            }

            visible[pos.to_nd_index()] = self.hidden_at(pos);
            if self.hidden_at(pos) == Cell::Empty {
                frontier.extend(
                    neighbors(pos, self.size)
                        .filter(|&next| visible[next.to_nd_index()].is_hidden())
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
    }

    fn target_position(&self, (x, y): (i32, i32)) -> Option<Position> {
        let x: Coord = x.try_into().ok()?;
        let y: Coord = y.try_into().ok()?;
        (x < self.size.0 && y < self.size.1).then_some((x, y))
    }
}

fn count_hidden(visible: &Array2<Cell>) -> usize {
    visible.iter().filter(|cell| cell.is_hidden()).count()
}
