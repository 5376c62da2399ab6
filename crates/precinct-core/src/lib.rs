//! Core types for the Precinct coverage framework.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! fundamental vocabulary shared by every other crate in the workspace:
//! grid coordinates, station identifiers, distance metrics, and error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod metric;

pub use error::{CoverageError, GridError, ParseKindError};
pub use id::{Cell, StationId};
pub use metric::{Adjacency, Metric};
