//! Per-query performance metrics.
//!
//! [`QueryMetrics`] captures timing and size data for a single coverage
//! evaluation, for profiling and for comparing solvers on the same input.

use std::time::Duration;

/// Timing and size metrics collected during a single evaluation.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMetrics {
    /// Time spent inside the solver, in microseconds.
    pub solve_us: u64,
    /// Time spent reducing the coverage map to a report, in microseconds.
    pub reduce_us: u64,
    /// Passable cells the solver assigned or reported unreached.
    pub cells_evaluated: usize,
    /// Stations in the query.
    pub stations: usize,
}

impl QueryMetrics {
    /// Wall-clock total of the measured phases, in microseconds.
    pub fn total_us(&self) -> u64 {
        self.solve_us.saturating_add(self.reduce_us)
    }
}

pub(crate) fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
