//! Benchmark profiles for the Precinct coverage solvers.
//!
//! Provides pre-built [`Scenario`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 16 stations, 20% walls
//! - [`stress_profile`]: 316x316 grid (~100K cells), 64 stations, 20% walls
//! - [`open_profile`]: obstacle-free twin of a profile, for cross-solver runs
//! - [`candidate_sets`]: deterministic alternative placements for batch runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use precinct_core::Cell;
use precinct_engine::{ConfigError, RandomLayout, Scenario};
use precinct_space::{CityGrid, StationSet};

/// Build a reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> Result<Scenario, ConfigError> {
    Scenario::random(RandomLayout {
        rows: 100,
        cols: 100,
        stations: 16,
        obstacle_ratio: 0.2,
        seed,
    })
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same wall density as [`reference_profile`] at 10x the cell count and
/// 4x the stations.
pub fn stress_profile(seed: u64) -> Result<Scenario, ConfigError> {
    Scenario::random(RandomLayout {
        rows: 316,
        cols: 316,
        stations: 64,
        obstacle_ratio: 0.2,
        seed,
    })
}

/// The same stations on an obstacle-free grid of the same size.
pub fn open_profile(scenario: &Scenario) -> Result<Scenario, ConfigError> {
    let grid = scenario.grid();
    let open = CityGrid::open(grid.rows() as usize, grid.cols() as usize)
        .map_err(precinct_core::CoverageError::from)?;
    let stations = StationSet::new(&open, scenario.stations().cells())?;
    Ok(Scenario::new(open, stations))
}

/// Generate `n` candidate placements by shifting every station of
/// `scenario` along the row by a seed-derived offset, keeping only
/// shifts whose cells are all passable and distinct.
pub fn candidate_sets(scenario: &Scenario, n: usize, seed: u64) -> Vec<Vec<Cell>> {
    let grid = scenario.grid();
    let cols = grid.cols() as i64;
    let base: Vec<Cell> = scenario.stations().cells().collect();
    let mut sets = Vec::with_capacity(n);
    let mut step: u64 = 0;
    while sets.len() < n && step < (n as u64) * 16 {
        let shift = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(step.wrapping_mul(1442695040888963407))
            % cols as u64) as i64;
        step += 1;
        let shifted: Vec<Cell> = base
            .iter()
            .map(|c| Cell::new(c.row, ((i64::from(c.col) + shift) % cols) as i32))
            .collect();
        if StationSet::new(grid, shifted.iter().copied()).is_ok() {
            sets.push(shifted);
        }
    }
    sets
}
