//! Multi-source breadth-first solver.
//!
//! Seeds a FIFO frontier with every station at distance 0, in station
//! order, then expands over passable cells under 4- or 8-connectivity.
//! The first station to reach a cell claims it. Because each layer of the
//! frontier stays ordered by claiming station, the claim always goes to
//! the lowest-id station among those at the minimal step count.
//!
//! This is the only obstacle-aware solver. Passable cells it never
//! reaches stay [`CellCoverage::Unreached`](crate::CellCoverage::Unreached).

use std::collections::VecDeque;

use precinct_core::{Adjacency, CoverageError, Metric, StationId};
use precinct_space::{neighbours_flat, CityGrid, StationSet};
use tracing::debug;

use crate::map::CoverageMap;

const UNVISITED: u32 = u32::MAX;

/// Run BFS under the adjacency that matches `metric`.
///
/// Manhattan uses 4-connectivity, Chebyshev 8-connectivity. Euclidean
/// has no unit-step grid graph and fails with
/// [`CoverageError::UnsupportedMetric`].
pub fn bfs(
    grid: &CityGrid,
    stations: &StationSet,
    metric: Metric,
) -> Result<CoverageMap, CoverageError> {
    let adjacency = metric
        .adjacency()
        .ok_or(CoverageError::UnsupportedMetric {
            solver: "bfs",
            metric,
        })?;
    multi_source_bfs(grid, stations, adjacency)
}

/// Run BFS with an explicit adjacency rule.
///
/// Station positions are re-checked against `grid`, so a set validated
/// against a different grid fails cleanly instead of indexing out of
/// bounds.
pub fn multi_source_bfs(
    grid: &CityGrid,
    stations: &StationSet,
    adjacency: Adjacency,
) -> Result<CoverageMap, CoverageError> {
    let n = grid.cell_count();
    let mut steps = vec![UNVISITED; n];
    let mut owner = vec![StationId(0); n];
    let mut frontier = VecDeque::with_capacity(grid.passable_count());

    for (id, cell) in stations.iter() {
        let i = grid.check(cell)?;
        if !grid.is_passable_at(i) {
            return Err(CoverageError::ImpassableStation { station: id, cell });
        }
        // Duplicates are rejected by StationSet; keep the first claim anyway.
        if steps[i] == UNVISITED {
            steps[i] = 0;
            owner[i] = id;
            frontier.push_back(i);
        }
    }
    if frontier.is_empty() {
        return Err(CoverageError::EmptyStationSet);
    }

    let mut reached = 0usize;
    while let Some(i) = frontier.pop_front() {
        reached += 1;
        let next = steps[i] + 1;
        for ni in neighbours_flat(grid, i, adjacency) {
            if steps[ni] == UNVISITED {
                steps[ni] = next;
                owner[ni] = owner[i];
                frontier.push_back(ni);
            }
        }
    }

    let mut map = CoverageMap::unreached(grid);
    for (i, (&s, &o)) in steps.iter().zip(&owner).enumerate() {
        if s != UNVISITED {
            map.cover(i, f64::from(s), o);
        }
    }
    debug!(
        solver = "bfs",
        ?adjacency,
        reached,
        unreached = grid.passable_count() - reached,
        stations = stations.len(),
        "frontier exhausted"
    );
    Ok(map)
}
