//! The board: a fixed grid of cells with Moore-neighbourhood adjacency.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board for a
//! presentation snapshot is O(1) and shares structure with the live one.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::Coord;

/// Neighbour list; at most 8 entries, kept inline.
pub type Neighbours = SmallVec<[Coord; 8]>;

/// Fixed `rows × cols` grid. Exactly one `Cell` exists per coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Coord::new(row, col))))
            .collect();
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// True if `coord` is on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| usize::from(coord.row) * usize::from(self.cols) + usize::from(coord.col))
    }

    /// The cell at `coord`.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(self.index(coord)?)
    }

    /// Mutable cell access.
    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let index = self.index(coord)?;
        self.cells.get_mut(index)
    }

    /// Height at `coord`, 0 off the board.
    #[must_use]
    pub fn height(&self, coord: Coord) -> u8 {
        self.cell(coord).map_or(0, Cell::height)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All coordinates, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// In-bounds 8-neighbours of `coord`, without wraparound and excluding
    /// `coord` itself. Empty for an off-board coordinate.
    ///
    /// ```
    /// use santorini_rules::board::Board;
    /// use santorini_rules::core::Coord;
    ///
    /// let board = Board::new(5, 5);
    /// assert_eq!(board.neighbours(Coord::new(0, 0)).len(), 3);
    /// assert_eq!(board.neighbours(Coord::new(0, 2)).len(), 5);
    /// assert_eq!(board.neighbours(Coord::new(2, 2)).len(), 8);
    /// ```
    #[must_use]
    pub fn neighbours(&self, coord: Coord) -> Neighbours {
        let mut out = Neighbours::new();
        if !self.contains(coord) {
            return out;
        }
        for d_row in -1i8..=1 {
            for d_col in -1i8..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                if let Some(n) = coord.offset(d_row, d_col).filter(|n| self.contains(*n)) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Set the highlight flag on one cell.
    pub fn highlight_cell(&mut self, coord: Coord) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.set_highlighted(true);
        }
    }

    /// Clear every highlight flag.
    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_highlighted(false);
        }
    }

    /// Coordinates currently highlighted, row-major.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.is_highlighted())
            .map(Cell::coord)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_one_cell_per_coordinate() {
        let board = Board::new(4, 6);
        assert_eq!(board.cells().count(), 24);
        for coord in board.coords() {
            assert_eq!(board.cell(coord).map(Cell::coord), Some(coord));
        }
        assert!(board.cell(Coord::new(4, 0)).is_none());
        assert!(board.cell(Coord::new(0, 6)).is_none());
    }

    #[test]
    fn test_neighbours_off_board_is_empty() {
        let board = Board::new(5, 5);
        assert!(board.neighbours(Coord::new(5, 5)).is_empty());
    }

    #[test]
    fn test_highlights_toggle() {
        let mut board = Board::new(5, 5);
        board.highlight_cell(Coord::new(1, 1));
        board.highlight_cell(Coord::new(3, 4));
        board.highlight_cell(Coord::new(9, 9));
        assert_eq!(board.highlighted(), vec![Coord::new(1, 1), Coord::new(3, 4)]);

        board.clear_highlights();
        assert!(board.highlighted().is_empty());
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut board = Board::new(5, 5);
        let snapshot = board.clone();
        if let Some(cell) = board.cell_mut(Coord::new(2, 2)) {
            cell.building_mut().add_level();
        }

        assert_eq!(board.height(Coord::new(2, 2)), 1);
        assert_eq!(snapshot.height(Coord::new(2, 2)), 0);
    }

    proptest! {
        #[test]
        fn prop_neighbour_counts(rows in 2u8..9, cols in 2u8..9, r in 0u8..9, c in 0u8..9) {
            prop_assume!(r < rows && c < cols);
            let board = Board::new(rows, cols);
            let origin = Coord::new(r, c);
            let neighbours = board.neighbours(origin);

            prop_assert!((3..=8).contains(&neighbours.len()));
            for n in &neighbours {
                prop_assert!(board.contains(*n));
                prop_assert!(origin.is_adjacent(*n));
            }
            prop_assert!(!neighbours.contains(&origin));
        }
    }
}
