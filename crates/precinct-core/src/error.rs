//! Error types for grid construction and coverage queries.
//!
//! Organized by subsystem: [`GridError`] for building and indexing the
//! grid model, [`CoverageError`] for everything a single coverage query
//! can reject. Every failure is a deterministic function of the input.

use thiserror::Error;

use crate::id::{Cell, StationId};
use crate::metric::Metric;

/// Errors from grid construction and coordinate lookup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid with zero rows or zero columns was requested.
    #[error("grid must have at least one cell, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A dimension does not fit the `i32` coordinate space.
    #[error("{name} = {value} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// Which dimension overflowed (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// Row-wise input where one row has a different width from the first.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// Every cell is blocked.
    #[error("grid has no passable cell")]
    NoPassableCell,
    /// Text layout contained a character that is not a known glyph.
    #[error("unknown glyph {glyph:?} at line {line}, column {column}")]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// Zero-based line.
        line: usize,
        /// Zero-based character column.
        column: usize,
    },
    /// A coordinate lies outside `[0, rows) x [0, cols)`.
    #[error("cell {cell} out of range [0, {rows}) x [0, {cols})")]
    OutOfRange {
        /// The offending coordinate.
        cell: Cell,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

/// Errors that reject a coverage query outright.
///
/// A coverage gap (unreachable cells) is *not* an error; it is reported
/// on the result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// The grid rejected a coordinate.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The query supplied no stations.
    #[error("station set is empty")]
    EmptyStationSet,
    /// A station sits on a blocked cell.
    #[error("station {station} at {cell} is on a blocked cell")]
    ImpassableStation {
        /// Position of the station in the input list.
        station: StationId,
        /// The blocked cell.
        cell: Cell,
    },
    /// Two stations share a cell.
    #[error("stations {first} and {second} both occupy {cell}")]
    DuplicateStation {
        /// The shared cell.
        cell: Cell,
        /// The earlier station.
        first: StationId,
        /// The later, rejected station.
        second: StationId,
    },
    /// The chosen solver cannot measure distance under this metric.
    #[error("solver '{solver}' does not support the {metric} metric")]
    UnsupportedMetric {
        /// Solver name.
        solver: &'static str,
        /// The rejected metric.
        metric: Metric,
    },
}

/// A textual name did not match any variant of a selectable kind
/// (metric or solver).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    /// What was being parsed, e.g. `"metric"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
