//! Precinct: how far must stations reach to cover a city grid?
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Precinct sub-crates. For most users, adding `precinct` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use precinct::prelude::*;
//!
//! // `#` is a wall, `S` a station.
//! let (grid, stations) = CityGrid::parse(
//!     "
//!     S.#..
//!     ..#..
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! // Walls bend BFS distances; the geometric solvers look straight through.
//! let bfs = evaluate_coverage(&grid, stations.clone(), Metric::Manhattan, SolverKind::Bfs)
//!     .unwrap();
//! let geo = evaluate_coverage(&grid, stations, Metric::Manhattan, SolverKind::BruteForce)
//!     .unwrap();
//! assert_eq!(bfs.radius, 8.0);
//! assert_eq!(geo.radius, 6.0);
//! assert!(bfs.gap.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `precinct-core` | Cells, station ids, metrics, error types |
//! | [`space`] | `precinct-space` | Grid model, adjacency, validated station sets |
//! | [`solvers`] | `precinct-solvers` | Brute-force, BFS, and k-d tree solvers |
//! | [`engine`] | `precinct-engine` | Evaluation, batch queries, cross-validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`precinct-core`).
///
/// Contains [`types::Cell`], [`types::StationId`], [`types::Metric`], and
/// the error enums [`types::GridError`] and [`types::CoverageError`].
pub use precinct_core as types;

/// Grid model and station sets (`precinct-space`).
///
/// [`space::CityGrid`] is the immutable obstacle grid;
/// [`space::StationSet`] is an ordered, validated list of stations on it.
pub use precinct_space as space;

/// Nearest-station solvers (`precinct-solvers`).
///
/// Each produces a [`solvers::CoverageMap`]; [`solvers::SolverKind`]
/// selects one at run time.
pub use precinct_solvers as solvers;

/// Coverage evaluation (`precinct-engine`).
///
/// [`engine::evaluate_coverage`] for one-off queries,
/// [`engine::Evaluator`] for configured queries with metrics,
/// [`engine::cross_validate`] and [`engine::evaluate_batch`] for
/// parallel work.
pub use precinct_engine as engine;

/// Common imports for typical Precinct usage.
///
/// ```rust
/// use precinct::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use precinct_core::{Cell, Metric, StationId};

    // Errors
    pub use precinct_core::{CoverageError, GridError};

    // Space
    pub use precinct_space::{CityGrid, StationSet};

    // Solvers
    pub use precinct_solvers::{CellCoverage, CoverageMap, SolverKind};

    // Engine
    pub use precinct_engine::{
        evaluate_coverage, CoverageGap, CoverageReport, Evaluator, EvaluatorConfig, QueryMetrics,
        Scenario,
    };
}
