//! The city grid: a rectangular passability map.

use precinct_core::{Cell, GridError};

/// Glyph for a passable cell in [`CityGrid::parse`].
pub const OPEN_GLYPH: char = '.';
/// Glyph for a blocked cell in [`CityGrid::parse`].
pub const BLOCKED_GLYPH: char = '#';
/// Glyph for a passable cell that also holds a station in [`CityGrid::parse`].
pub const STATION_GLYPH: char = 'S';

/// A two-dimensional grid of passable and blocked cells.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Cells are stored row-major; the flat index of
/// `(r, c)` is `r * cols + c`, and that is also the canonical iteration
/// order used by every solver.
///
/// A grid is immutable once built and always holds at least one
/// passable cell.
///
/// # Examples
///
/// ```
/// use precinct_core::Cell;
/// use precinct_space::CityGrid;
///
/// let grid = CityGrid::with_blocked(3, 3, [Cell::new(1, 1)]).unwrap();
/// assert_eq!(grid.cell_count(), 9);
/// assert_eq!(grid.passable_count(), 8);
/// assert!(!grid.is_passable(Cell::new(1, 1)).unwrap());
/// assert!(grid.is_passable(Cell::new(3, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGrid {
    rows: u32,
    cols: u32,
    passable: Vec<bool>,
    passable_count: usize,
}

impl CityGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// An obstacle-free grid with `rows * cols` cells.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        let (r, c) = check_dims(rows, cols)?;
        Self::from_mask(r, c, vec![true; rows * cols])
    }

    /// A grid with every listed cell blocked and all others passable.
    ///
    /// Listing a cell twice is harmless. Fails with
    /// [`GridError::OutOfRange`] if a blocked cell lies outside the grid.
    pub fn with_blocked(
        rows: usize,
        cols: usize,
        blocked: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, GridError> {
        let (r, c) = check_dims(rows, cols)?;
        let mut mask = vec![true; rows * cols];
        for cell in blocked {
            let i = flat_index(cell, r, c)?;
            mask[i] = false;
        }
        Self::from_mask(r, c, mask)
    }

    /// Build from row-wise passability flags (`true` = passable).
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let (r, c) = check_dims(rows.len(), expected)?;
        let mut mask = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            mask.extend_from_slice(row);
        }
        Self::from_mask(r, c, mask)
    }

    /// Parse a text layout.
    ///
    /// Each non-blank line is one row after trimming surrounding
    /// whitespace. `.` is passable, `#` is blocked, and `S` is a passable
    /// cell holding a station. Station positions are returned in
    /// row-major order alongside the grid.
    ///
    /// ```
    /// use precinct_core::Cell;
    /// use precinct_space::CityGrid;
    ///
    /// let (grid, stations) = CityGrid::parse("
    ///     S..
    ///     .#.
    ///     ..S
    /// ").unwrap();
    /// assert_eq!(grid.blocked_count(), 1);
    /// assert_eq!(stations, vec![Cell::new(0, 0), Cell::new(2, 2)]);
    /// ```
    pub fn parse(text: &str) -> Result<(Self, Vec<Cell>), GridError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut stations = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let r = rows.len() as i32;
            let mut row = Vec::with_capacity(line.len());
            for (column, glyph) in line.chars().enumerate() {
                match glyph {
                    OPEN_GLYPH => row.push(true),
                    BLOCKED_GLYPH => row.push(false),
                    STATION_GLYPH => {
                        stations.push(Cell::new(r, row.len() as i32));
                        row.push(true);
                    }
                    _ => {
                        return Err(GridError::UnknownGlyph {
                            glyph,
                            line: line_no,
                            column,
                        })
                    }
                }
            }
            rows.push(row);
        }
        Ok((Self::from_rows(&rows)?, stations))
    }

    fn from_mask(rows: u32, cols: u32, passable: Vec<bool>) -> Result<Self, GridError> {
        let passable_count = passable.iter().filter(|&&p| p).count();
        if passable_count == 0 {
            return Err(GridError::NoPassableCell);
        }
        Ok(Self {
            rows,
            cols,
            passable,
            passable_count,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, passable or not.
    pub fn cell_count(&self) -> usize {
        self.passable.len()
    }

    /// Number of passable cells. Always at least 1.
    pub fn passable_count(&self) -> usize {
        self.passable_count
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cell_count() - self.passable_count
    }

    /// Whether any cell is blocked.
    pub fn has_obstacles(&self) -> bool {
        self.passable_count < self.cell_count()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// Flat row-major index of `cell`, or `None` if out of range.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        flat_index(cell, self.rows, self.cols).ok()
    }

    /// Flat row-major index of `cell`, or [`GridError::OutOfRange`].
    pub fn check(&self, cell: Cell) -> Result<usize, GridError> {
        flat_index(cell, self.rows, self.cols)
    }

    /// The cell at flat index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn cell_at(&self, index: usize) -> Cell {
        assert!(index < self.cell_count(), "index {index} out of range");
        let cols = self.cols as usize;
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }

    /// Whether `cell` is passable. Bounds-checked.
    pub fn is_passable(&self, cell: Cell) -> Result<bool, GridError> {
        self.check(cell).map(|i| self.passable[i])
    }

    /// Passability by flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn is_passable_at(&self, index: usize) -> bool {
        self.passable[index]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at(i))
    }

    /// Passable cells in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.passable
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| self.cell_at(i))
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(u32, u32), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols });
    }
    if rows > CityGrid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: CityGrid::MAX_DIM,
        });
    }
    if cols > CityGrid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: CityGrid::MAX_DIM,
        });
    }
    Ok((rows as u32, cols as u32))
}

/// Row-major index of `cell` in a `rows` x `cols` layout.
///
/// Every per-cell table keyed by a grid (the grid's own mask and the
/// solvers' coverage maps) goes through this one function.
pub fn flat_index(cell: Cell, rows: u32, cols: u32) -> Result<usize, GridError> {
    if cell.row < 0 || cell.row as u32 >= rows || cell.col < 0 || cell.col as u32 >= cols {
        return Err(GridError::OutOfRange { cell, rows, cols });
    }
    Ok(cell.row as usize * cols as usize + cell.col as usize)
}
