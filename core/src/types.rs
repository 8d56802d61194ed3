/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for trap counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional board position `(x, y)`, 0-indexed.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-8 neighbors of `center`, clipped to `bounds`.
pub fn neighbors(center: Position, bounds: Position) -> impl Iterator<Item = Position> {
    DISPLACEMENTS
        .iter()
        .filter_map(move |&delta| offset(center, delta, bounds))
}

fn offset((x, y): Position, (dx, dy): (i8, i8), (max_x, max_y): Position) -> Option<Position> {
    let next_x = x.checked_add_signed(dx)?;
    let next_y = y.checked_add_signed(dy)?;
    (next_x < max_x && next_y < max_y).then_some((next_x, next_y))
}
