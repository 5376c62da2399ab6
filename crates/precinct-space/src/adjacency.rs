//! Neighbour lookup on a [`CityGrid`] under 4- or 8-connectivity.
//!
//! Edges absorb: a move that would leave the grid is simply omitted, so
//! corner cells have 2 (Four) or 3 (Eight) neighbours. Blocked cells
//! are never returned.

use precinct_core::{Adjacency, Cell};
use smallvec::SmallVec;

use crate::grid::CityGrid;

/// Passable in-bounds neighbours of `cell`, in [`Adjacency::offsets`] order.
///
/// `cell` itself need not be passable or even in range; only the
/// neighbours are filtered.
pub fn passable_neighbours(
    grid: &CityGrid,
    cell: Cell,
    adjacency: Adjacency,
) -> SmallVec<[Cell; 8]> {
    adjacency
        .offsets()
        .iter()
        .map(|&(dr, dc)| cell.offset(dr, dc))
        .filter(|&nb| grid.index_of(nb).is_some_and(|i| grid.is_passable_at(i)))
        .collect()
}

/// Flat indices of the passable neighbours of the cell at flat index
/// `index`, in [`Adjacency::offsets`] order.
///
/// This is the hot-path form used by the breadth-first solver: it avoids
/// re-deriving indices for every neighbour.
pub fn neighbours_flat(
    grid: &CityGrid,
    index: usize,
    adjacency: Adjacency,
) -> SmallVec<[usize; 8]> {
    let rows = grid.rows() as i32;
    let cols = grid.cols() as i32;
    let r = (index / cols as usize) as i32;
    let c = (index % cols as usize) as i32;
    let mut result = SmallVec::new();
    for &(dr, dc) in adjacency.offsets() {
        let nr = r + dr;
        let nc = c + dc;
        if nr < 0 || nr >= rows || nc < 0 || nc >= cols {
            continue;
        }
        let ni = nr as usize * cols as usize + nc as usize;
        if grid.is_passable_at(ni) {
            result.push(ni);
        }
    }
    result
}
