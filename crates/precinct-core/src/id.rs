//! Strongly-typed identifiers and the [`Cell`] coordinate type.

use std::fmt;

/// A grid coordinate: `(row, col)`.
///
/// Coordinates are signed so that neighbour offsets can step outside the
/// grid before being bounds-checked. A `Cell` on its own carries no
/// guarantee of being in range; grids validate them on every lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0 <= row < rows` when in range.
    pub row: i32,
    /// Column index, `0 <= col < cols` when in range.
    pub col: i32,
}

impl Cell {
    /// Construct a cell from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`. May be out of range.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Absolute per-axis differences `(|Δrow|, |Δcol|)`.
    pub fn abs_diff(self, other: Cell) -> (u32, u32) {
        (
            self.row.abs_diff(other.row),
            self.col.abs_diff(other.col),
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Identifies a station within a station set.
///
/// `StationId(n)` is the n-th station in insertion order. Every solver
/// breaks distance ties in favour of the lower id, which makes results
/// reproducible for a fixed station ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl StationId {
    /// The id as a `usize` index into the station list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StationId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
