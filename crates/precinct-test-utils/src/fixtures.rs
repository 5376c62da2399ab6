//! Reusable coverage scenarios.
//!
//! Small hand-built layouts with known answers:
//!
//! - [`center_of_three`]: 3×3 open grid, one station in the middle.
//! - [`walled_pocket`]: 5×5 grid whose centre cell is cut off from the
//!   corner station under 4-connectivity only.
//! - [`sealed_pocket`]: the same pocket closed on all eight sides.
//! - [`station_everywhere`]: every passable cell holds a station.

use precinct_core::Cell;
use precinct_space::{CityGrid, StationSet};

/// Parse a text layout and validate its `S` cells as the station set.
///
/// # Panics
///
/// Panics if the layout does not parse or its stations are invalid.
pub fn layout(text: &str) -> (CityGrid, StationSet) {
    let (grid, stations) = CityGrid::parse(text).expect("layout should parse");
    let stations = StationSet::new(&grid, stations).expect("layout stations should be valid");
    (grid, stations)
}

/// An obstacle-free grid with stations at the given `(row, col)` pairs.
pub fn open_with_stations(rows: usize, cols: usize, at: &[(i32, i32)]) -> (CityGrid, StationSet) {
    let grid = CityGrid::open(rows, cols).expect("open grid");
    let stations =
        StationSet::new(&grid, at.iter().copied().map(Cell::from)).expect("valid stations");
    (grid, stations)
}

/// 3×3 open grid with one station at `(1, 1)`.
///
/// Radius is 1 (Chebyshev), 2 (Manhattan), √2 (Euclidean).
pub fn center_of_three() -> (CityGrid, StationSet) {
    open_with_stations(3, 3, &[(1, 1)])
}

/// 5×5 grid, station at `(0, 0)`, and `(2, 2)` walled off on all four
/// sides. Under 4-connectivity `(2, 2)` is a coverage gap; the diagonals
/// are open, so 8-connectivity reaches it.
pub fn walled_pocket() -> (CityGrid, StationSet) {
    layout(
        "
        S....
        ..#..
        .#.#.
        ..#..
        .....
        ",
    )
}

/// The same grid as [`walled_pocket`] with the diagonals sealed too, so
/// `(2, 2)` is unreachable under either adjacency.
pub fn sealed_pocket() -> (CityGrid, StationSet) {
    layout(
        "
        S....
        .###.
        .#.#.
        .###.
        .....
        ",
    )
}

/// A station on every passable cell of `grid`, in row-major order.
pub fn station_everywhere(grid: &CityGrid) -> StationSet {
    StationSet::new(grid, grid.passable_cells()).expect("passable cells are valid stations")
}
