//! Coverage evaluation: solver output reduced to a radius and a gap.
//!
//! [`evaluate_coverage`] is the one-call entry point. [`Evaluator`] holds
//! a validated [`EvaluatorConfig`] and also returns per-query
//! [`QueryMetrics`].

use std::time::Instant;

use precinct_core::{Cell, CoverageError, Metric};
use precinct_solvers::{CoverageMap, SolverKind};
use precinct_space::{CityGrid, StationSet};
use tracing::{info, warn};

use crate::config::{ConfigError, EvaluatorConfig};
use crate::metrics::{micros, QueryMetrics};

// ── Report types ───────────────────────────────────────────────────

/// Passable cells that no station can reach.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageGap {
    /// Number of unreached cells.
    pub count: usize,
    /// Their positions in row-major order. Empty when the evaluator was
    /// configured not to record them, even if `count > 0`.
    pub cells: Vec<Cell>,
}

impl CoverageGap {
    /// `true` when every passable cell is reachable.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The answer to a coverage query.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageReport {
    /// Largest nearest-station distance over reachable cells. Unreached
    /// cells never contribute.
    pub radius: f64,
    /// Number of reachable passable cells.
    pub covered: usize,
    /// Unreachable passable cells.
    pub gap: CoverageGap,
}

impl CoverageReport {
    /// Whether every passable cell is reachable and within `radius`.
    pub fn is_fully_covered_by(&self, radius: f64) -> bool {
        self.gap.is_empty() && self.radius <= radius
    }
}

/// A report with the metrics of the query that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The coverage answer.
    pub report: CoverageReport,
    /// How long it took and how much it touched.
    pub metrics: QueryMetrics,
}

// ── Reduction ──────────────────────────────────────────────────────

/// Reduce a coverage map to a report, listing every unreached cell.
pub fn reduce(map: &CoverageMap) -> CoverageReport {
    reduce_with(map, true)
}

/// Reduce a coverage map to a report, optionally listing unreached cells.
pub fn reduce_with(map: &CoverageMap, record_gap_cells: bool) -> CoverageReport {
    let cells: Vec<Cell> = if record_gap_cells {
        map.unreached_cells().collect()
    } else {
        Vec::new()
    };
    CoverageReport {
        radius: map.max_distance().unwrap_or(0.0),
        covered: map.covered_count(),
        gap: CoverageGap {
            count: map.unreached_count(),
            cells,
        },
    }
}

// ── Evaluator ──────────────────────────────────────────────────────

/// Runs coverage queries under a fixed, validated configuration.
///
/// # Examples
///
/// ```
/// use precinct_core::{Cell, Metric};
/// use precinct_engine::{Evaluator, EvaluatorConfig};
/// use precinct_solvers::SolverKind;
/// use precinct_space::{CityGrid, StationSet};
///
/// let grid = CityGrid::open(3, 3).unwrap();
/// let stations = StationSet::new(&grid, [Cell::new(1, 1)]).unwrap();
/// let evaluator =
///     Evaluator::new(EvaluatorConfig::new(Metric::Chebyshev, SolverKind::SpatialTree)).unwrap();
/// let eval = evaluator.evaluate(&grid, &stations).unwrap();
/// assert_eq!(eval.report.radius, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Validate `config` and wrap it.
    pub fn new(config: EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Wrap `config` without validating it; the solver still rejects an
    /// unsupported metric when a query runs.
    pub(crate) fn unchecked(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator runs with.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a validated station set.
    pub fn evaluate(
        &self,
        grid: &CityGrid,
        stations: &StationSet,
    ) -> Result<Evaluation, CoverageError> {
        let EvaluatorConfig { metric, solver, .. } = self.config;
        if !solver.is_obstacle_aware() && grid.has_obstacles() {
            warn!(
                %solver,
                blocked = grid.blocked_count(),
                "geometric solver ignores obstacles on this grid"
            );
        }

        let start = Instant::now();
        let map = solver.solve(grid, stations, metric)?;
        let solve_us = micros(start.elapsed());

        let start = Instant::now();
        let report = reduce_with(&map, self.config.record_gap_cells);
        let reduce_us = micros(start.elapsed());

        info!(
            %solver,
            %metric,
            radius = report.radius,
            covered = report.covered,
            gap = report.gap.count,
            "coverage evaluated"
        );
        Ok(Evaluation {
            report,
            metrics: QueryMetrics {
                solve_us,
                reduce_us,
                cells_evaluated: grid.passable_count(),
                stations: stations.len(),
            },
        })
    }

    /// Validate a raw station list against `grid`, then evaluate it.
    pub fn evaluate_cells(
        &self,
        grid: &CityGrid,
        stations: impl IntoIterator<Item = Cell>,
    ) -> Result<Evaluation, CoverageError> {
        let stations = StationSet::new(grid, stations)?;
        self.evaluate(grid, &stations)
    }
}

/// Compute the covering radius and coverage gap of `stations` on `grid`.
///
/// Stations are validated first: each must be in range, passable, and
/// unique, and there must be at least one. The solver is used exactly as
/// given; pair obstacle grids with [`SolverKind::Bfs`] for walls to count.
///
/// # Errors
///
/// Any station validation failure, or
/// [`CoverageError::UnsupportedMetric`] for BFS with Euclidean.
pub fn evaluate_coverage(
    grid: &CityGrid,
    stations: impl IntoIterator<Item = Cell>,
    metric: Metric,
    solver: SolverKind,
) -> Result<CoverageReport, CoverageError> {
    let stations = StationSet::new(grid, stations)?;
    let evaluator = Evaluator::unchecked(EvaluatorConfig::new(metric, solver));
    Ok(evaluator.evaluate(grid, &stations)?.report)
}
