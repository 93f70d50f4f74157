//! Board coordinates.
//!
//! A `Coord` is a (row, col) pair. Coordinates are plain values: they do not
//! know the board they belong to, so bounds are always checked by `Board`.

use serde::{Deserialize, Serialize};

/// A cell position on the board, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 = top).
    pub row: u8,
    /// Column index (0 = left).
    pub col: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate, returning `None` if it would go negative.
    ///
    /// Upper bounds are the board's concern.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// True if `other` is one of the 8 Moore neighbours of `self`.
    ///
    /// ```
    /// use santorini_rules::core::Coord;
    ///
    /// let c = Coord::new(2, 2);
    /// assert!(c.is_adjacent(Coord::new(1, 3)));
    /// assert!(!c.is_adjacent(c));
    /// assert!(!c.is_adjacent(Coord::new(4, 2)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Self { row, col }
    }
}
