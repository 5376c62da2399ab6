//! Per-cell nearest-station records produced by every solver.

use precinct_core::{Cell, StationId};
use precinct_space::{flat_index, CityGrid};

/// What a solver learned about one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellCoverage {
    /// The cell is an obstacle. Never part of the radius.
    Blocked,
    /// Passable, but no station can reach it. Only the breadth-first
    /// solver produces this; it is a coverage gap.
    Unreached,
    /// Nearest station and the distance to it.
    Covered {
        /// Distance under the query's metric (or BFS step count).
        distance: f64,
        /// The claiming station; the lowest id among equidistant ones.
        station: StationId,
    },
}

impl CellCoverage {
    /// Distance to the nearest station, if covered.
    pub fn distance(self) -> Option<f64> {
        match self {
            Self::Covered { distance, .. } => Some(distance),
            Self::Blocked | Self::Unreached => None,
        }
    }

    /// The claiming station, if covered.
    pub fn station(self) -> Option<StationId> {
        match self {
            Self::Covered { station, .. } => Some(station),
            Self::Blocked | Self::Unreached => None,
        }
    }
}

/// Row-major table of [`CellCoverage`] for every cell of a grid.
///
/// Built fresh by each solver run and owned by whoever requested it;
/// nothing is cached between queries.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMap {
    rows: u32,
    cols: u32,
    cells: Vec<CellCoverage>,
}

impl CoverageMap {
    /// A map with blocked cells marked and every passable cell `Unreached`.
    pub(crate) fn unreached(grid: &CityGrid) -> Self {
        let cells = (0..grid.cell_count())
            .map(|i| {
                if grid.is_passable_at(i) {
                    CellCoverage::Unreached
                } else {
                    CellCoverage::Blocked
                }
            })
            .collect();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
        }
    }

    pub(crate) fn cover(&mut self, index: usize, distance: f64, station: StationId) {
        self.cells[index] = CellCoverage::Covered { distance, station };
    }

    /// Number of rows of the source grid.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns of the source grid.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Record for `cell`, or `None` if out of range.
    pub fn get(&self, cell: Cell) -> Option<CellCoverage> {
        let i = flat_index(cell, self.rows, self.cols).ok()?;
        self.cells.get(i).copied()
    }

    /// Nearest-station distance for `cell`, if in range and covered.
    pub fn distance(&self, cell: Cell) -> Option<f64> {
        self.get(cell).and_then(CellCoverage::distance)
    }

    /// Claiming station for `cell`, if in range and covered.
    pub fn station(&self, cell: Cell) -> Option<StationId> {
        self.get(cell).and_then(CellCoverage::station)
    }

    /// All records with their cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellCoverage)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cov)| (Cell::new((i / cols) as i32, (i % cols) as i32), cov))
    }

    /// Passable cells no station reaches, row-major.
    pub fn unreached_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, cov)| matches!(cov, CellCoverage::Unreached))
            .map(|(cell, _)| cell)
    }

    /// Number of covered cells.
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|c| c.distance().is_some()).count()
    }

    /// Number of unreached passable cells.
    pub fn unreached_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellCoverage::Unreached))
            .count()
    }

    /// Largest nearest-station distance over covered cells.
    ///
    /// `None` only if nothing is covered, which a successful solver run
    /// never produces (station cells are always covered at distance 0).
    pub fn max_distance(&self) -> Option<f64> {
        self.cells
            .iter()
            .filter_map(|c| c.distance())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Number of covered cells whose nearest station is within `radius`.
    ///
    /// This is what a radius slider shows: everything inside the count is
    /// protected at that radius.
    pub fn covered_within(&self, radius: f64) -> usize {
        self.cells
            .iter()
            .filter_map(|c| c.distance())
            .filter(|&d| d <= radius)
            .count()
    }

    /// Cells claimed per station, indexed by [`StationId`].
    ///
    /// `station_count` sizes the result so stations that claim nothing
    /// still get a zero entry.
    pub fn territory_sizes(&self, station_count: usize) -> Vec<usize> {
        let mut sizes = vec![0usize; station_count];
        for station in self.cells.iter().filter_map(|c| c.station()) {
            if let Some(slot) = sizes.get_mut(station.index()) {
                *slot += 1;
            }
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    fn sample() -> CoverageMap {
        let grid = CityGrid::with_blocked(2, 3, [c(0, 1)]).unwrap();
        let mut map = CoverageMap::unreached(&grid);
        map.cover(0, 0.0, StationId(0));
        map.cover(3, 1.0, StationId(0));
        map.cover(4, 2.0, StationId(1));
        map
    }

    #[test]
    fn fresh_map_marks_blocked_and_unreached() {
        let grid = CityGrid::with_blocked(2, 2, [c(1, 1)]).unwrap();
        let map = CoverageMap::unreached(&grid);
        assert_eq!(map.get(c(1, 1)), Some(CellCoverage::Blocked));
        assert_eq!(map.get(c(0, 0)), Some(CellCoverage::Unreached));
        assert_eq!(map.unreached_count(), 3);
        assert_eq!(map.covered_count(), 0);
        assert_eq!(map.max_distance(), None);
    }

    #[test]
    fn lookups() {
        let map = sample();
        assert_eq!(map.distance(c(1, 1)), Some(2.0));
        assert_eq!(map.station(c(1, 1)), Some(StationId(1)));
        assert_eq!(map.distance(c(0, 1)), None);
        assert_eq!(map.get(c(2, 0)), None);
        assert_eq!(map.get(c(0, -1)), None);
    }

    #[test]
    fn lookups_index_like_the_grid() {
        let grid = CityGrid::with_blocked(3, 4, [c(1, 2), c(2, 0)]).unwrap();
        let map = CoverageMap::unreached(&grid);
        for r in -1..=3 {
            for col in -1..=4 {
                let cell = c(r, col);
                let expected = grid.index_of(cell).map(|i| {
                    if grid.is_passable_at(i) {
                        CellCoverage::Unreached
                    } else {
                        CellCoverage::Blocked
                    }
                });
                assert_eq!(map.get(cell), expected, "{cell}");
            }
        }
    }

    #[test]
    fn summaries() {
        let map = sample();
        assert_eq!(map.covered_count(), 3);
        assert_eq!(map.unreached_cells().collect::<Vec<_>>(), vec![c(0, 2), c(1, 2)]);
        assert_eq!(map.max_distance(), Some(2.0));
        assert_eq!(map.covered_within(0.0), 1);
        assert_eq!(map.covered_within(1.5), 2);
        assert_eq!(map.territory_sizes(3), vec![2, 1, 0]);
    }
}
