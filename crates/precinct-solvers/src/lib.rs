//! Nearest-station solvers for Precinct coverage queries.
//!
//! Three independent algorithms compute the same thing, a
//! [`CoverageMap`] recording the nearest station and its distance for
//! every passable cell, so that each can check the others:
//!
//! 1. [`brute_force`]: linear scan per cell; the reference oracle.
//! 2. [`bfs`]: multi-source breadth-first search; the only solver that
//!    routes around obstacles.
//! 3. [`spatial_tree`]: balanced k-d tree with branch-and-bound pruning.
//!
//! The geometric solvers (1 and 3) ignore obstacles. On an obstacle-free
//! grid all applicable solvers produce identical maps, tie-breaking
//! included.
//!
//! Selection is the closed enum [`SolverKind`]; there is no solver trait,
//! because each solver's obstacle semantics must be chosen deliberately.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bfs;
pub mod brute_force;
pub mod kdtree;
pub mod map;

use std::fmt;
use std::str::FromStr;

use precinct_core::{CoverageError, Metric, ParseKindError};
use precinct_space::{CityGrid, StationSet};

pub use bfs::{bfs, multi_source_bfs};
pub use brute_force::{brute_force, nearest_station};
pub use kdtree::{spatial_tree, spatial_tree_with_index, KdTree};
pub use map::{CellCoverage, CoverageMap};

/// Which solver a query runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Linear scan; geometric; any metric.
    BruteForce,
    /// Multi-source BFS; obstacle-aware; Manhattan or Chebyshev.
    Bfs,
    /// k-d tree nearest neighbour; geometric; any metric.
    SpatialTree,
}

impl SolverKind {
    /// Every solver, in declaration order.
    pub const ALL: [SolverKind; 3] = [
        SolverKind::BruteForce,
        SolverKind::Bfs,
        SolverKind::SpatialTree,
    ];

    /// Lower-case name, matching [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Bfs => "bfs",
            Self::SpatialTree => "spatial_tree",
        }
    }

    /// Whether blocked cells bend distances (BFS) or are looked straight
    /// through (the geometric solvers).
    pub fn is_obstacle_aware(self) -> bool {
        matches!(self, Self::Bfs)
    }

    /// Whether this solver can run under `metric`.
    pub fn supports(self, metric: Metric) -> bool {
        match self {
            Self::Bfs => metric.adjacency().is_some(),
            Self::BruteForce | Self::SpatialTree => true,
        }
    }

    /// Run this solver.
    ///
    /// # Errors
    ///
    /// [`CoverageError::UnsupportedMetric`] if `!self.supports(metric)`;
    /// otherwise whatever the solver itself reports.
    pub fn solve(
        self,
        grid: &CityGrid,
        stations: &StationSet,
        metric: Metric,
    ) -> Result<CoverageMap, CoverageError> {
        match self {
            Self::BruteForce => brute_force(grid, stations, metric),
            Self::Bfs => bfs(grid, stations, metric),
            Self::SpatialTree => spatial_tree(grid, stations, metric),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "brute_force" | "bruteforce" | "brute" => Ok(Self::BruteForce),
            "bfs" => Ok(Self::Bfs),
            "spatial_tree" | "kd_tree" | "kdtree" => Ok(Self::SpatialTree),
            _ => Err(ParseKindError {
                kind: "solver",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precinct_core::Cell;

    #[test]
    fn parse_names() {
        assert_eq!("brute-force".parse::<SolverKind>().unwrap(), SolverKind::BruteForce);
        assert_eq!("BFS".parse::<SolverKind>().unwrap(), SolverKind::Bfs);
        assert_eq!("kd-tree".parse::<SolverKind>().unwrap(), SolverKind::SpatialTree);
        assert!("dijkstra".parse::<SolverKind>().is_err());
        for kind in SolverKind::ALL {
            assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
        }
    }

    #[test]
    fn support_matrix() {
        assert!(SolverKind::Bfs.supports(Metric::Manhattan));
        assert!(SolverKind::Bfs.supports(Metric::Chebyshev));
        assert!(!SolverKind::Bfs.supports(Metric::Euclidean));
        for metric in Metric::ALL {
            assert!(SolverKind::BruteForce.supports(metric));
            assert!(SolverKind::SpatialTree.supports(metric));
        }
        assert!(SolverKind::Bfs.is_obstacle_aware());
        assert!(!SolverKind::SpatialTree.is_obstacle_aware());
    }

    #[test]
    fn dispatch_reaches_each_solver() {
        let grid = CityGrid::open(3, 3).unwrap();
        let stations = StationSet::new(&grid, [Cell::new(1, 1)]).unwrap();
        for kind in SolverKind::ALL {
            let map = kind.solve(&grid, &stations, Metric::Chebyshev).unwrap();
            assert_eq!(map.max_distance(), Some(1.0), "{kind}");
        }
        assert!(SolverKind::Bfs
            .solve(&grid, &stations, Metric::Euclidean)
            .is_err());
    }
}
