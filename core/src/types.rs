/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, zero-based over the playable area.
pub type Coord2 = (Coord, Coord);

/// Index into a bordered backing grid, where `(0, _)` and `(_, 0)` are border cells.
pub(crate) type BorderedIndex = (usize, usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Shift playable coordinates by the one-cell border margin.
pub(crate) const fn bordered((x, y): Coord2) -> BorderedIndex {
    (x as usize + 1, y as usize + 1)
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the eight backing-grid neighbors of a bordered index.
///
/// There is no bounds check: the center must not lie on the border, which the
/// one-cell margin around every playable cell guarantees.
#[derive(Debug)]
pub(crate) struct NeighborIter {
    center: BorderedIndex,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: BorderedIndex) -> Self {
        debug_assert!(center.0 >= 1 && center.1 >= 1, "center on the border");
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = BorderedIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let &(dx, dy) = DISPLACEMENTS.get(usize::from(self.index))?;
        self.index += 1;
        Some((
            self.center.0.wrapping_add_signed(dx),
            self.center.1.wrapping_add_signed(dy),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = DISPLACEMENTS.len() - usize::from(self.index);
        (left, Some(left))
    }
}
