//! Grid invariant test helpers.
//!
//! These functions verify that a [`CityGrid`] and the adjacency rules over
//! it satisfy the invariants the solvers rely on. Reused across the grid
//! and adjacency test modules.

use crate::adjacency::passable_neighbours;
use crate::grid::CityGrid;
use indexmap::IndexSet;
use precinct_core::{Adjacency, Metric};

const ADJACENCIES: [Adjacency; 2] = [Adjacency::Four, Adjacency::Eight];

/// Assert that `b in N(a)` implies `a in N(b)` for every passable cell.
pub fn assert_neighbours_symmetric(grid: &CityGrid) {
    for adj in ADJACENCIES {
        for cell in grid.passable_cells() {
            for nb in passable_neighbours(grid, cell, adj) {
                let back = passable_neighbours(grid, nb, adj);
                assert!(
                    back.contains(&cell),
                    "{adj:?} neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
                );
            }
        }
    }
}

/// Assert that every neighbour is in range, passable, and one metric step away.
pub fn assert_neighbours_are_unit_steps(grid: &CityGrid) {
    for adj in ADJACENCIES {
        for cell in grid.cells() {
            for nb in passable_neighbours(grid, cell, adj) {
                assert_eq!(grid.is_passable(nb), Ok(true), "{nb} not passable");
                let d = adj.metric().distance(cell, nb);
                assert_eq!(d, 1.0, "{adj:?} step {cell} -> {nb} has length {d}");
            }
        }
    }
}

/// Assert that `cells()` lists each cell exactly once and round-trips
/// through `index_of`.
pub fn assert_canonical_ordering_complete(grid: &CityGrid) {
    let unique: IndexSet<_> = grid.cells().collect();
    assert_eq!(unique.len(), grid.cell_count(), "cells() has duplicates");
    for (i, cell) in unique.iter().enumerate() {
        assert_eq!(grid.index_of(*cell), Some(i), "index_of({cell}) != {i}");
    }
}

/// Assert that `passable_cells()` agrees with the cached passable count.
pub fn assert_passable_count_consistent(grid: &CityGrid) {
    assert_eq!(grid.passable_cells().count(), grid.passable_count());
    assert_eq!(
        grid.passable_count() + grid.blocked_count(),
        grid.cell_count()
    );
    assert_eq!(grid.has_obstacles(), grid.blocked_count() > 0);
}

/// Assert that every metric is reflexive and symmetric over all cell pairs.
pub fn assert_metrics_well_formed(grid: &CityGrid) {
    let cells: Vec<_> = grid.cells().collect();
    for m in Metric::ALL {
        for &a in &cells {
            assert_eq!(m.distance(a, a), 0.0, "{m}: d({a}, {a}) != 0");
            for &b in &cells {
                assert_eq!(m.distance(a, b), m.distance(b, a), "{m}: asymmetric at {a}, {b}");
            }
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &CityGrid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_are_unit_steps(grid);
    assert_canonical_ordering_complete(grid);
    assert_passable_count_consistent(grid);
    assert_metrics_well_formed(grid);
}
