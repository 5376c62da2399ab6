//! Grid model for Precinct coverage queries.
//!
//! This crate defines [`CityGrid`], the passability map every solver
//! reads, along with neighbour lookup under 4- and 8-connectivity and
//! the validated [`StationSet`] that a query places on it.
//!
//! Nothing here mutates after construction: a grid and its station set
//! are snapshots handed to a single query.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod grid;
pub mod station;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{neighbours_flat, passable_neighbours};
pub use grid::{flat_index, CityGrid};
pub use station::StationSet;
