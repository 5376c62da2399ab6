//! Parallel coverage queries.
//!
//! Two workloads share one worker pool:
//!
//! - [`evaluate_batch`] scores many candidate station sets on the same
//!   grid, for comparing placements.
//! - [`cross_validate`] runs every applicable solver on the same query and
//!   checks that they agree.
//!
//! # Design
//!
//! Work items are indices pushed onto a `crossbeam-channel` queue before
//! any worker starts. Each worker is a scoped thread that pulls indices,
//! evaluates, and sends `(index, result)` back; results are written into
//! their input slot, so output order never depends on scheduling. There
//! is no cancellation: dropped work is simply never collected.

use std::thread;

use precinct_core::{Cell, CoverageError, Metric};
use precinct_solvers::SolverKind;
use precinct_space::{CityGrid, StationSet};
use tracing::{debug, warn};

use crate::config::{validate_tolerance, ConfigError};
use crate::evaluate::{reduce, CoverageReport, Evaluation, Evaluator};

// ── Error type ──────────────────────────────────────────────────

/// Error from a batched operation, annotated with the failing item index.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BatchError {
    /// A candidate failed validation or evaluation.
    #[error("candidate {index}: {error}")]
    Candidate {
        /// Index of the candidate that failed (0-based).
        index: usize,
        /// The underlying error.
        #[source]
        error: CoverageError,
    },
    /// A solver failed during cross-validation.
    #[error("solver '{solver}': {error}")]
    Solver {
        /// The solver that failed.
        solver: SolverKind,
        /// The underlying error.
        #[source]
        error: CoverageError,
    },
    /// Invalid batch parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A worker thread could not be spawned.
    #[error("thread spawn failed: {reason}")]
    ThreadSpawnFailed {
        /// The OS error message.
        reason: String,
    },
    /// A worker exited without reporting its result.
    #[error("worker exited without a result for item {index}")]
    MissingResult {
        /// Index of the item with no result.
        index: usize,
    },
}

// ── Worker pool ─────────────────────────────────────────────────

/// Apply `job` to every item on up to `workers` scoped threads, returning
/// results in input order.
fn run_parallel<T, R, F>(items: &[T], workers: usize, job: F) -> Result<Vec<R>, BatchError>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let n = items.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let workers = workers.clamp(1, n);

    let (task_tx, task_rx) = crossbeam_channel::unbounded::<usize>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, R)>();
    for i in 0..n {
        // The receiver is alive until this function returns.
        task_tx
            .send(i)
            .map_err(|_| BatchError::MissingResult { index: i })?;
    }
    drop(task_tx);

    let job = &job;
    thread::scope(|scope| -> Result<(), BatchError> {
        for w in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            thread::Builder::new()
                .name(format!("precinct-batch-{w}"))
                .spawn_scoped(scope, move || {
                    while let Ok(i) = task_rx.recv() {
                        if result_tx.send((i, job(&items[i]))).is_err() {
                            break;
                        }
                    }
                })
                .map_err(|e| BatchError::ThreadSpawnFailed {
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    })?;
    drop(result_tx);

    let mut slots: Vec<Option<R>> = (0..n).map(|_| None).collect();
    for (i, result) in result_rx.try_iter() {
        slots[i] = Some(result);
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(BatchError::MissingResult { index }))
        .collect()
}

// ── Batch evaluation ────────────────────────────────────────────

/// Evaluate each candidate station list on `grid` in parallel.
///
/// Uses the evaluator's metric, solver, and
/// [`resolved_worker_count`](crate::EvaluatorConfig::resolved_worker_count).
/// Results are in input order and identical to evaluating each candidate
/// sequentially (timings aside).
///
/// # Errors
///
/// [`BatchError::Candidate`] for the lowest-indexed candidate that fails.
pub fn evaluate_batch<S>(
    evaluator: &Evaluator,
    grid: &CityGrid,
    candidates: &[S],
) -> Result<Vec<Evaluation>, BatchError>
where
    S: AsRef<[Cell]> + Sync,
{
    let workers = evaluator.config().resolved_worker_count();
    debug!(candidates = candidates.len(), workers, "batch started");
    let results = run_parallel(candidates, workers, |candidate| {
        evaluator.evaluate_cells(grid, candidate.as_ref().iter().copied())
    })?;
    results
        .into_iter()
        .enumerate()
        .map(|(index, r)| r.map_err(|error| BatchError::Candidate { index, error }))
        .collect()
}

/// Index of the best evaluation: smallest gap, then smallest radius,
/// then lowest index. `None` for an empty slice.
pub fn best_candidate(evaluations: &[Evaluation]) -> Option<usize> {
    evaluations
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.report
                .gap
                .count
                .cmp(&b.report.gap.count)
                .then(a.report.radius.total_cmp(&b.report.radius))
        })
        .map(|(i, _)| i)
}

// ── Cross-validation ────────────────────────────────────────────

/// Every applicable solver's answer to one query.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossCheck {
    /// The metric all solvers ran under.
    pub metric: Metric,
    /// One report per solver, in [`SolverKind::ALL`] order.
    pub outcomes: Vec<(SolverKind, CoverageReport)>,
    /// Whether comparable solvers agreed within tolerance.
    ///
    /// On an obstacle-free grid every solver is compared. On a grid with
    /// obstacles only the geometric solvers are compared with each other;
    /// BFS is expected to differ and is reported but not compared.
    pub agreed: bool,
}

impl CrossCheck {
    /// The report from `solver`, if it ran.
    pub fn report(&self, solver: SolverKind) -> Option<&CoverageReport> {
        self.outcomes
            .iter()
            .find(|(kind, _)| *kind == solver)
            .map(|(_, report)| report)
    }

    /// Largest minus smallest radius across all outcomes.
    pub fn radius_spread(&self) -> f64 {
        let radii = self.outcomes.iter().map(|(_, r)| r.radius);
        let max = radii.clone().fold(f64::NEG_INFINITY, f64::max);
        let min = radii.fold(f64::INFINITY, f64::min);
        if self.outcomes.is_empty() {
            0.0
        } else {
            max - min
        }
    }
}

/// Run every solver that supports `metric` on the same query, in
/// parallel, and compare their radii and gaps.
///
/// A disagreement is logged at `warn` and reported through
/// [`CrossCheck::agreed`]; it is not an error.
///
/// # Errors
///
/// [`ConfigError::InvalidTolerance`] (wrapped) for a bad tolerance;
/// [`BatchError::Solver`] if any solver fails.
pub fn cross_validate(
    grid: &CityGrid,
    stations: &StationSet,
    metric: Metric,
    tolerance: f64,
) -> Result<CrossCheck, BatchError> {
    validate_tolerance(tolerance)?;
    let solvers: Vec<SolverKind> = SolverKind::ALL
        .into_iter()
        .filter(|s| s.supports(metric))
        .collect();

    let results = run_parallel(&solvers, solvers.len(), |&solver| {
        solver.solve(grid, stations, metric).map(|map| reduce(&map))
    })?;
    let outcomes = solvers
        .iter()
        .zip(results)
        .map(|(&solver, r)| {
            r.map(|report| (solver, report))
                .map_err(|error| BatchError::Solver { solver, error })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let compared: Vec<&CoverageReport> = outcomes
        .iter()
        .filter(|(solver, _)| !grid.has_obstacles() || !solver.is_obstacle_aware())
        .map(|(_, report)| report)
        .collect();
    let agreed = compared.windows(2).all(|pair| {
        (pair[0].radius - pair[1].radius).abs() <= tolerance && pair[0].gap == pair[1].gap
    });

    if agreed {
        debug!(%metric, solvers = outcomes.len(), "solvers agree");
    } else {
        let radii: Vec<(SolverKind, f64)> = outcomes
            .iter()
            .map(|(solver, report)| (*solver, report.radius))
            .collect();
        warn!(%metric, ?radii, tolerance, "solvers disagree");
    }
    Ok(CrossCheck {
        metric,
        outcomes,
        agreed,
    })
}
