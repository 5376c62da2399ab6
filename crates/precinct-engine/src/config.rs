//! Evaluator configuration, validation, and error types.
//!
//! [`EvaluatorConfig`] is the builder-input for an
//! [`Evaluator`](crate::Evaluator). [`validate()`](EvaluatorConfig::validate)
//! checks that the metric/solver pair can run and that the tolerance is
//! usable before any query is made.

use precinct_core::{CoverageError, Metric};
use precinct_solvers::SolverKind;

/// Default tolerance for comparing Euclidean radii across solvers.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Upper bound on explicitly requested worker threads.
pub const MAX_WORKERS: usize = 64;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or a random layout
/// request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The solver cannot run under the metric (BFS with Euclidean).
    #[error("solver '{solver}' does not support the {metric} metric")]
    UnsupportedPair {
        /// The configured solver.
        solver: SolverKind,
        /// The configured metric.
        metric: Metric,
    },
    /// Tolerance is NaN, infinite, or negative.
    #[error("tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// The invalid value.
        value: f64,
    },
    /// Obstacle ratio outside `[0, 1]`.
    #[error("obstacle ratio must lie in [0, 1], got {value}")]
    InvalidObstacleRatio {
        /// The invalid value.
        value: f64,
    },
    /// More stations requested than there are passable cells.
    #[error("requested {requested} stations but only {available} passable cells")]
    TooManyStations {
        /// Stations asked for.
        requested: usize,
        /// Passable cells available.
        available: usize,
    },
    /// The generated layout was rejected by grid or station validation.
    #[error(transparent)]
    Layout(#[from] CoverageError),
}

// ── EvaluatorConfig ────────────────────────────────────────────────

/// How a coverage query is run and reported.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatorConfig {
    /// Distance metric. Default: Manhattan.
    pub metric: Metric,
    /// Solver to run. Default: BFS, the only one that respects obstacles.
    pub solver: SolverKind,
    /// Whether reports list every unreached cell or only count them.
    /// Default: `true`.
    pub record_gap_cells: bool,
    /// Absolute tolerance when comparing radii across solvers.
    /// Default: [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,
    /// Worker threads for batch queries. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub worker_count: Option<usize>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Manhattan,
            solver: SolverKind::Bfs,
            record_gap_cells: true,
            tolerance: DEFAULT_TOLERANCE,
            worker_count: None,
        }
    }
}

impl EvaluatorConfig {
    /// Default configuration with an explicit metric and solver.
    pub fn new(metric: Metric, solver: SolverKind) -> Self {
        Self {
            metric,
            solver,
            ..Self::default()
        }
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

    /// Choose whether unreached cells are listed in reports.
    pub fn with_gap_cells(mut self, record: bool) -> Self {
        self.record_gap_cells = record;
        self
    }

    /// Replace the cross-solver tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Pin the batch worker count.
    pub fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = Some(workers);
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedPair`] if the solver cannot run under the
    /// metric; [`ConfigError::InvalidTolerance`] if the tolerance is not a
    /// finite non-negative number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.solver.supports(self.metric) {
            return Err(ConfigError::UnsupportedPair {
                solver: self.solver,
                metric: self.metric,
            });
        }
        validate_tolerance(self.tolerance)
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { value: tolerance })
    }
}
