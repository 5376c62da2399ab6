//! Validated, insertion-ordered station sets.

use indexmap::IndexSet;
use precinct_core::{Cell, CoverageError, StationId};

use crate::grid::CityGrid;

/// An ordered, non-empty set of distinct station positions, all on
/// passable cells of the grid they were validated against.
///
/// Station `i` in insertion order has [`StationId`]`(i)`. The ordering is
/// part of the query: solvers resolve equidistant stations in favour of
/// the lower id.
///
/// # Examples
///
/// ```
/// use precinct_core::{Cell, CoverageError, StationId};
/// use precinct_space::{CityGrid, StationSet};
///
/// let grid = CityGrid::with_blocked(3, 3, [Cell::new(1, 1)]).unwrap();
/// let stations = StationSet::new(&grid, [Cell::new(0, 0), Cell::new(2, 2)]).unwrap();
/// assert_eq!(stations.len(), 2);
/// assert_eq!(stations.id_of(Cell::new(2, 2)), Some(StationId(1)));
///
/// let err = StationSet::new(&grid, [Cell::new(1, 1)]).unwrap_err();
/// assert!(matches!(err, CoverageError::ImpassableStation { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationSet {
    cells: IndexSet<Cell>,
}

impl StationSet {
    /// Validate `cells` against `grid`.
    ///
    /// # Errors
    ///
    /// - [`CoverageError::Grid`] wrapping `OutOfRange` for a station
    ///   outside the grid
    /// - [`CoverageError::ImpassableStation`] for a station on a blocked cell
    /// - [`CoverageError::DuplicateStation`] for a repeated position
    /// - [`CoverageError::EmptyStationSet`] if `cells` is empty
    ///
    /// Stations are checked in order; the first failure wins.
    pub fn new(
        grid: &CityGrid,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, CoverageError> {
        let mut set = IndexSet::new();
        for (i, cell) in cells.into_iter().enumerate() {
            let station = StationId(i as u32);
            if !grid.is_passable(cell)? {
                return Err(CoverageError::ImpassableStation { station, cell });
            }
            let (index, inserted) = set.insert_full(cell);
            if !inserted {
                return Err(CoverageError::DuplicateStation {
                    cell,
                    first: StationId(index as u32),
                    second: station,
                });
            }
        }
        if set.is_empty() {
            return Err(CoverageError::EmptyStationSet);
        }
        Ok(Self { cells: set })
    }

    /// A new set with `cell` appended as the last station.
    pub fn with_station(&self, grid: &CityGrid, cell: Cell) -> Result<Self, CoverageError> {
        Self::new(grid, self.cells().chain(std::iter::once(cell)))
    }

    /// Number of stations. Always at least 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of station `id`.
    pub fn get(&self, id: StationId) -> Option<Cell> {
        self.cells.get_index(id.index()).copied()
    }

    /// Id of the station at `cell`, if there is one.
    pub fn id_of(&self, cell: Cell) -> Option<StationId> {
        self.cells.get_index_of(&cell).map(|i| StationId(i as u32))
    }

    /// Station positions in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// `(id, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (StationId(i as u32), cell))
    }
}
