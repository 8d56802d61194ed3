use serde::{Deserialize, Serialize};

/// Cell content shared by the hidden and visible layers.
///
/// `Hidden` is the visible-layer placeholder for "not yet revealed"; it
/// never appears on the hidden layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Empty,
    Adjacent(u8),
    Danger,
}

impl Cell {
    /// Ground-truth content for a safe cell with `count` adjacent dangers.
    pub const fn from_adjacent_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Adjacent(count)
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
