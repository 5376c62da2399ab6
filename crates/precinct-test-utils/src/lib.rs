//! Test utilities for Precinct development.
//!
//! Provides hand-built [`fixtures`] with known coverage answers and
//! `proptest` strategies that generate random grids and station sets for
//! cross-solver property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use precinct_core::{Cell, Metric};
use precinct_space::{CityGrid, StationSet};
use proptest::prelude::*;
use proptest::sample::Index;

pub use fixtures::{
    center_of_three, layout, open_with_stations, sealed_pocket, station_everywhere, walled_pocket,
};

/// Floating-point tolerance for comparing Euclidean radii.
pub const EPSILON: f64 = 1e-9;

/// Any of the three metrics.
pub fn arb_metric() -> impl Strategy<Value = Metric> {
    prop_oneof![
        Just(Metric::Manhattan),
        Just(Metric::Chebyshev),
        Just(Metric::Euclidean),
    ]
}

/// A metric with a grid adjacency (Manhattan or Chebyshev).
pub fn arb_grid_metric() -> impl Strategy<Value = Metric> {
    prop_oneof![Just(Metric::Manhattan), Just(Metric::Chebyshev)]
}

/// Pick up to `picks.len()` distinct cells from `pool`, keeping the
/// first occurrence of each.
fn pick_distinct(pool: &[Cell], picks: &[Index]) -> Vec<Cell> {
    let mut chosen: Vec<Cell> = Vec::with_capacity(picks.len());
    for ix in picks {
        let cell = *ix.get(pool);
        if !chosen.contains(&cell) {
            chosen.push(cell);
        }
    }
    chosen
}

/// An obstacle-free grid up to `max_dim` on a side with between 1 and
/// `max_stations` distinct stations.
pub fn arb_open_layout(
    max_dim: usize,
    max_stations: usize,
) -> impl Strategy<Value = (CityGrid, StationSet)> {
    (
        1..=max_dim,
        1..=max_dim,
        proptest::collection::vec(any::<Index>(), 1..=max_stations),
    )
        .prop_map(|(rows, cols, picks)| {
            let grid = CityGrid::open(rows, cols).expect("non-empty dims");
            let pool: Vec<Cell> = grid.cells().collect();
            let stations =
                StationSet::new(&grid, pick_distinct(&pool, &picks)).expect("distinct open cells");
            (grid, stations)
        })
}

/// A grid up to `max_dim` on a side where each cell is blocked with
/// probability `wall_ratio`, and 1 to `max_stations` distinct stations on
/// passable cells.
///
/// If the mask blocks everything, cell `(0, 0)` is reopened.
pub fn arb_walled_layout(
    max_dim: usize,
    max_stations: usize,
    wall_ratio: f64,
) -> impl Strategy<Value = (CityGrid, StationSet)> {
    (1..=max_dim, 1..=max_dim)
        .prop_flat_map(move |(rows, cols)| {
            (
                Just(rows),
                Just(cols),
                proptest::collection::vec(proptest::bool::weighted(wall_ratio), rows * cols),
                proptest::collection::vec(any::<Index>(), 1..=max_stations),
            )
        })
        .prop_map(|(rows, cols, mut walls, picks)| {
            if walls.iter().all(|&w| w) {
                walls[0] = false;
            }
            let mask: Vec<Vec<bool>> = walls
                .chunks(cols)
                .map(|row| row.iter().map(|&w| !w).collect())
                .collect();
            debug_assert_eq!(mask.len(), rows);
            let grid = CityGrid::from_rows(&mask).expect("at least one passable cell");
            let pool: Vec<Cell> = grid.passable_cells().collect();
            let stations = StationSet::new(&grid, pick_distinct(&pool, &picks))
                .expect("distinct passable cells");
            (grid, stations)
        })
}

/// Assert two radii agree: exactly for integral metrics, within
/// [`EPSILON`] for Euclidean.
pub fn assert_radius_eq(metric: Metric, a: f64, b: f64) {
    if metric.is_integral() {
        assert_eq!(a, b, "{metric} radii differ");
    } else {
        assert!((a - b).abs() < EPSILON, "{metric} radii differ: {a} vs {b}");
    }
}
