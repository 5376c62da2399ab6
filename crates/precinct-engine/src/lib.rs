//! Coverage evaluation for Precinct.
//!
//! Turns a solver's [`CoverageMap`](precinct_solvers::CoverageMap) into a
//! [`CoverageReport`]: the covering radius plus the cells no station can
//! reach. On top of single queries it provides parallel batch evaluation
//! of candidate station sets, cross-validation of the three solvers, and
//! an owned [`Scenario`] holding the state an interactive front end
//! would keep between queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod config;
pub mod evaluate;
pub mod metrics;
pub mod scenario;

pub use batched::{best_candidate, cross_validate, evaluate_batch, BatchError, CrossCheck};
pub use config::{ConfigError, EvaluatorConfig, DEFAULT_TOLERANCE};
pub use evaluate::{
    evaluate_coverage, reduce, reduce_with, CoverageGap, CoverageReport, Evaluation, Evaluator,
};
pub use metrics::QueryMetrics;
pub use scenario::{RandomLayout, Scenario};
