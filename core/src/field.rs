use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::{NeighborIter, bordered};
use crate::*;

/// Content of a single playable cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Number of mines among the up to 8 neighbors.
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Mine placement and adjacency counts for one game.
///
/// Backed by a `(width + 2) x (height + 2)` grid whose outer ring is an
/// unplayable border, so every playable cell has eight addressable neighbors.
/// Border cells always hold `Count(0)` and are never exposed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Minefield {
    grid: Array2<CellValue>,
    size: Coord2,
    mine_count: CellCount,
}

impl Minefield {
    pub(crate) fn empty(size: Coord2) -> Self {
        let shape = (usize::from(size.0) + 2, usize::from(size.1) + 2);
        Self {
            grid: Array2::default(shape),
            size,
            mine_count: 0,
        }
    }

    /// Builds a field with mines at exactly the given coordinates, duplicates are ignored.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size, 0)?;
        let mut field = Self::empty(size);
        for &coords in mine_coords {
            let coords = field.validate_coords(coords)?;
            field.place_mine(coords);
        }
        GameConfig::new(size, field.mine_count)?;
        field.fill_counts();
        Ok(field)
    }

    /// Marks a mine, returns `false` if one was already there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.grid[bordered(coords)];
        if cell.is_mine() {
            return false;
        }
        *cell = CellValue::Mine;
        self.mine_count += 1;
        true
    }

    /// Stores the adjacency count of every playable non-mine cell.
    pub(crate) fn fill_counts(&mut self) {
        let (width, height) = self.size;
        for x in 0..width {
            for y in 0..height {
                let index = bordered((x, y));
                if self.grid[index].is_mine() {
                    continue;
                }
                let count = NeighborIter::new(index)
                    .filter(|&pos| self.grid[pos].is_mine())
                    .count();
                // at most 8 neighbors
                self.grid[index] = CellValue::Count(count as u8);
            }
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.size.0 && y < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<CellValue> {
        self.contains(coords).then(|| self.grid[bordered(coords)])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.get(coords).is_some_and(CellValue::is_mine)
    }

    /// Counts neighboring mines from scratch instead of reading the stored value.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    /// Playable neighbors of `coords`, border positions are skipped.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size;
        NeighborIter::new(bordered(coords)).filter_map(move |(bx, by)| {
            let playable = (1..=usize::from(width)).contains(&bx)
                && (1..=usize::from(height)).contains(&by);
            playable.then(|| ((bx - 1) as Coord, (by - 1) as Coord))
        })
    }

    /// Every playable coordinate in column-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size;
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.coords().filter(|&coords| self[coords].is_mine())
    }
}

impl Index<Coord2> for Minefield {
    type Output = CellValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        assert!(self.contains(coords), "{coords:?} is outside the minefield");
        &self.grid[bordered(coords)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn single_centre_mine_counts_one_everywhere() {
        let field = Minefield::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(field.mine_count(), 1);
        assert_eq!(field[(1, 1)], CellValue::Mine);
        for coords in field.coords().filter(|&c| c != (1, 1)) {
            assert_eq!(field[coords], CellValue::Count(1), "at {coords:?}");
        }
    }

    #[test]
    fn corner_neighbors_skip_border() {
        let field = Minefield::from_mine_coords((3, 2), &[]).unwrap();

        let mut neighbors: Vec<_> = field.neighbors((0, 0)).collect();
        neighbors.sort();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(field.neighbors((1, 0)).count(), 5);
    }

    #[test]
    fn border_is_never_a_mine() {
        let field = Minefield::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        let (width, height) = field.grid.dim();
        assert_eq!((width, height), (4, 4));
        for x in 0..width {
            assert!(!field.grid[(x, 0)].is_mine());
            assert!(!field.grid[(x, height - 1)].is_mine());
        }
        for y in 0..height {
            assert!(!field.grid[(0, y)].is_mine());
            assert!(!field.grid[(width - 1, y)].is_mine());
        }
    }

    #[test]
    fn stored_counts_match_recount() {
        let field = Minefield::from_mine_coords((4, 3), &[(0, 0), (3, 2), (1, 1)]).unwrap();

        for coords in field.coords() {
            if let CellValue::Count(count) = field[coords] {
                assert_eq!(count, field.adjacent_mine_count(coords), "at {coords:?}");
            }
        }
        assert_eq!(field[(0, 1)], CellValue::Count(2));
    }

    #[test]
    fn from_mine_coords_rejects_bad_input() {
        assert_eq!(
            Minefield::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords((2, 0)))
        );
        assert!(matches!(
            Minefield::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::TooManyMines { .. })
        ));
        assert_eq!(
            Minefield::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn duplicate_mines_count_once() {
        let field = Minefield::from_mine_coords((3, 3), &[(2, 2), (2, 2)]).unwrap();
        assert_eq!(field.mine_count(), 1);
        assert_eq!(field.mines().collect::<Vec<_>>(), [(2, 2)]);
    }

    #[test]
    fn get_outside_is_none() {
        let field = Minefield::from_mine_coords((2, 2), &[]).unwrap();
        assert_eq!(field.get((2, 1)), None);
        assert_eq!(field.get((1, 1)), Some(CellValue::Count(0)));
        assert!(!field.contains_mine((9, 9)));
    }
}
