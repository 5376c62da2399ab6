//! Exhaustive reference solver.
//!
//! For every passable cell, scans every station and keeps the closest.
//! O(cells × stations). Obstacles are ignored: distance is purely
//! geometric under the chosen [`Metric`].
//!
//! This is the oracle the other solvers are checked against. Keep it
//! obviously correct rather than fast.

use precinct_core::{Cell, CoverageError, Metric, StationId};
use precinct_space::{CityGrid, StationSet};
use tracing::debug;

use crate::map::CoverageMap;

/// Nearest station to `cell` by linear scan.
///
/// Ties go to the station that appears first. `None` only when
/// `stations` yields nothing.
pub fn nearest_station(
    cell: Cell,
    stations: impl IntoIterator<Item = (StationId, Cell)>,
    metric: Metric,
) -> Option<(StationId, f64)> {
    let mut best: Option<(StationId, f64)> = None;
    for (id, at) in stations {
        let d = metric.distance(cell, at);
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((id, d));
        }
    }
    best
}

/// Run the brute-force solver over every passable cell of `grid`.
///
/// Works with all three metrics. Fails with
/// [`CoverageError::EmptyStationSet`] if there is nothing to scan.
pub fn brute_force(
    grid: &CityGrid,
    stations: &StationSet,
    metric: Metric,
) -> Result<CoverageMap, CoverageError> {
    let mut map = CoverageMap::unreached(grid);
    for (i, cell) in grid.cells().enumerate() {
        if !grid.is_passable_at(i) {
            continue;
        }
        let (station, distance) =
            nearest_station(cell, stations.iter(), metric).ok_or(CoverageError::EmptyStationSet)?;
        map.cover(i, distance, station);
    }
    debug!(
        solver = "brute_force",
        %metric,
        cells = grid.passable_count(),
        stations = stations.len(),
        "scan complete"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    #[test]
    fn center_of_three_by_three() {
        let grid = CityGrid::open(3, 3).unwrap();
        let stations = StationSet::new(&grid, [c(1, 1)]).unwrap();
        let cheb = brute_force(&grid, &stations, Metric::Chebyshev).unwrap();
        let manh = brute_force(&grid, &stations, Metric::Manhattan).unwrap();
        let eucl = brute_force(&grid, &stations, Metric::Euclidean).unwrap();
        assert_eq!(cheb.max_distance(), Some(1.0));
        assert_eq!(manh.max_distance(), Some(2.0));
        assert_eq!(eucl.max_distance(), Some(2f64.sqrt()));
    }

    #[test]
    fn blocked_cells_skipped_but_walls_ignored() {
        let (grid, st) = CityGrid::parse(
            "
            S#.
            .#.
            ",
        )
        .unwrap();
        let stations = StationSet::new(&grid, st).unwrap();
        let map = brute_force(&grid, &stations, Metric::Manhattan).unwrap();
        assert_eq!(map.distance(c(0, 1)), None);
        // Straight through the wall: geometric distance only.
        assert_eq!(map.distance(c(0, 2)), Some(2.0));
        assert_eq!(map.unreached_count(), 0);
    }

    #[test]
    fn ties_go_to_first_station() {
        let grid = CityGrid::open(1, 3).unwrap();
        let stations = StationSet::new(&grid, [c(0, 2), c(0, 0)]).unwrap();
        let map = brute_force(&grid, &stations, Metric::Manhattan).unwrap();
        assert_eq!(map.station(c(0, 1)), Some(StationId(0)));
    }

    #[test]
    fn nearest_station_on_empty_input() {
        assert_eq!(nearest_station(c(0, 0), std::iter::empty(), Metric::Euclidean), None);
    }
}
