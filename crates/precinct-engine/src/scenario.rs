//! Owned application state: one grid, its stations, and how to query them.
//!
//! A [`Scenario`] is what an interactive front end would hold between
//! redraws. Queries never mutate it; editing stations replaces the
//! station set wholesale, so every query sees a validated snapshot.
//!
//! [`Scenario::random`] builds a reproducible layout from a
//! [`RandomLayout`] request using a seeded ChaCha8 stream.

use precinct_core::{Cell, CoverageError, Metric, StationId};
use precinct_solvers::SolverKind;
use precinct_space::{CityGrid, StationSet};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{ConfigError, EvaluatorConfig};
use crate::evaluate::{CoverageReport, Evaluator};

/// Parameters for a seeded random layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomLayout {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Number of distinct stations to place on passable cells.
    pub stations: usize,
    /// Probability that any given cell is blocked, in `[0, 1]`.
    pub obstacle_ratio: f64,
    /// Seed for the ChaCha8 stream. Equal requests give equal layouts.
    pub seed: u64,
}

impl Default for RandomLayout {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            stations: 8,
            obstacle_ratio: 0.2,
            seed: 0,
        }
    }
}

/// A grid, a station set, and the metric and solver to query them with.
#[derive(Clone, Debug)]
pub struct Scenario {
    grid: CityGrid,
    stations: StationSet,
    metric: Metric,
    solver: SolverKind,
}

impl Scenario {
    /// A scenario queried with Manhattan distance and BFS.
    pub fn new(grid: CityGrid, stations: StationSet) -> Self {
        let defaults = EvaluatorConfig::default();
        Self {
            grid,
            stations,
            metric: defaults.metric,
            solver: defaults.solver,
        }
    }

    /// Parse a text layout (`.` open, `#` blocked, `S` station).
    pub fn parse(text: &str) -> Result<Self, CoverageError> {
        let (grid, cells) = CityGrid::parse(text)?;
        let stations = StationSet::new(&grid, cells)?;
        Ok(Self::new(grid, stations))
    }

    /// Generate a reproducible random layout.
    ///
    /// Each cell is blocked independently with probability
    /// `obstacle_ratio`; stations are then drawn without replacement from
    /// the passable cells.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidObstacleRatio`] for a ratio outside `[0, 1]`;
    /// [`ConfigError::TooManyStations`] if fewer passable cells than
    /// stations remain; [`ConfigError::Layout`] for grid errors (zero
    /// dimensions, nothing passable) or a request for zero stations.
    pub fn random(layout: RandomLayout) -> Result<Self, ConfigError> {
        let RandomLayout {
            rows,
            cols,
            stations,
            obstacle_ratio,
            seed,
        } = layout;
        if !(0.0..=1.0).contains(&obstacle_ratio) {
            return Err(ConfigError::InvalidObstacleRatio {
                value: obstacle_ratio,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mask: Vec<Vec<bool>> = (0..rows)
            .map(|_| (0..cols).map(|_| !rng.gen_bool(obstacle_ratio)).collect())
            .collect();
        let grid = CityGrid::from_rows(&mask).map_err(CoverageError::from)?;

        let mut open: Vec<Cell> = grid.passable_cells().collect();
        if stations > open.len() {
            return Err(ConfigError::TooManyStations {
                requested: stations,
                available: open.len(),
            });
        }
        let (chosen, _) = open.partial_shuffle(&mut rng, stations);
        let stations = StationSet::new(&grid, chosen.iter().copied())?;

        debug!(
            rows,
            cols,
            blocked = grid.blocked_count(),
            stations = stations.len(),
            seed,
            "random layout generated"
        );
        Ok(Self::new(grid, stations))
    }

    /// Replace the metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Replace the solver.
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// The grid.
    pub fn grid(&self) -> &CityGrid {
        &self.grid
    }

    /// The current stations.
    pub fn stations(&self) -> &StationSet {
        &self.stations
    }

    /// The metric queries run under.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The solver queries run with.
    pub fn solver(&self) -> SolverKind {
        self.solver
    }

    /// Switch the metric in place.
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Switch the solver in place.
    pub fn set_solver(&mut self, solver: SolverKind) {
        self.solver = solver;
    }

    /// Append a station. It gets the next id.
    pub fn add_station(&mut self, cell: Cell) -> Result<StationId, CoverageError> {
        self.stations = self.stations.with_station(&self.grid, cell)?;
        Ok(StationId(self.stations.len() as u32 - 1))
    }

    /// Remove the station at `cell`. Later stations shift down one id.
    ///
    /// Returns the removed station's former id, or `None` if no station
    /// was at `cell`.
    ///
    /// # Errors
    ///
    /// [`CoverageError::EmptyStationSet`] when removing the last station;
    /// the scenario is left unchanged.
    pub fn remove_station(&mut self, cell: Cell) -> Result<Option<StationId>, CoverageError> {
        let Some(id) = self.stations.id_of(cell) else {
            return Ok(None);
        };
        let remaining = self.stations.cells().filter(|&c| c != cell);
        self.stations = StationSet::new(&self.grid, remaining)?;
        Ok(Some(id))
    }

    /// The evaluator configuration this scenario implies.
    pub fn config(&self) -> EvaluatorConfig {
        EvaluatorConfig::new(self.metric, self.solver)
    }

    /// Evaluate the current stations.
    ///
    /// # Errors
    ///
    /// [`CoverageError::UnsupportedMetric`] if the solver cannot run under
    /// the metric.
    pub fn evaluate(&self) -> Result<CoverageReport, CoverageError> {
        let evaluator = Evaluator::unchecked(self.config());
        Ok(evaluator.evaluate(&self.grid, &self.stations)?.report)
    }
}
