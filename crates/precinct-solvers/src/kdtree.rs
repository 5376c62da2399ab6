//! Balanced 2-d tree over station positions, and the solver built on it.
//!
//! Nodes live in a flat arena. Each node splits on row (even depth) or
//! column (odd depth) at the median of its subtree and records the
//! bounding box of every station below it. Nearest-station queries
//! descend the near side first and skip any subtree whose box cannot hold
//! anything closer than the current best, using
//! [`Metric::rect_lower_bound`].
//!
//! Pruning only discards boxes that are *strictly* farther than the
//! best so far, so an equidistant station with a lower id is never
//! skipped. That keeps results identical to the brute-force scan,
//! ties included.
//!
//! The tree ignores obstacles. It is never updated in place: a changed
//! station set needs a fresh [`KdTree::build`].

use precinct_core::{Cell, CoverageError, Metric, StationId};
use precinct_space::{CityGrid, StationSet};
use tracing::debug;

use crate::map::CoverageMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Row,
    Col,
}

impl Axis {
    fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Self::Row
        } else {
            Self::Col
        }
    }

    fn of(self, cell: Cell) -> i32 {
        match self {
            Self::Row => cell.row,
            Self::Col => cell.col,
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    station: StationId,
    cell: Cell,
    axis: Axis,
    left: Option<usize>,
    right: Option<usize>,
    /// Bounding box of this node's subtree, inclusive.
    min: Cell,
    max: Cell,
}

/// A static spatial index over a set of stations.
///
/// # Examples
///
/// ```
/// use precinct_core::{Cell, Metric, StationId};
/// use precinct_solvers::KdTree;
///
/// let tree = KdTree::build([
///     (StationId(0), Cell::new(0, 0)),
///     (StationId(1), Cell::new(9, 9)),
/// ])
/// .unwrap();
/// assert_eq!(tree.nearest(Cell::new(7, 8), Metric::Euclidean).0, StationId(1));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    nodes: Vec<Node>,
    root: usize,
}

impl KdTree {
    /// Build a balanced tree over `(id, position)` pairs.
    ///
    /// Fails with [`CoverageError::EmptyStationSet`] if there are none.
    pub fn build(
        stations: impl IntoIterator<Item = (StationId, Cell)>,
    ) -> Result<Self, CoverageError> {
        let mut points: Vec<(StationId, Cell)> = stations.into_iter().collect();
        if points.is_empty() {
            return Err(CoverageError::EmptyStationSet);
        }
        let mut nodes = Vec::with_capacity(points.len());
        let root = build_subtree(&mut nodes, &mut points, 0);
        Ok(Self { nodes, root })
    }

    /// Build over every station of a validated set.
    pub fn from_stations(stations: &StationSet) -> Result<Self, CoverageError> {
        Self::build(stations.iter())
    }

    /// Number of indexed stations.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always returns `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], i: Option<usize>) -> usize {
            match i {
                None => 0,
                Some(i) => 1 + walk(nodes, nodes[i].left).max(walk(nodes, nodes[i].right)),
            }
        }
        walk(&self.nodes, Some(self.root))
    }

    /// Nearest station to `cell` and its distance under `metric`.
    ///
    /// Equidistant stations resolve to the lowest id.
    pub fn nearest(&self, cell: Cell, metric: Metric) -> (StationId, f64) {
        let root = &self.nodes[self.root];
        let mut best = (root.station, metric.distance(cell, root.cell));
        self.search(self.root, cell, metric, &mut best);
        best
    }

    fn search(&self, i: usize, query: Cell, metric: Metric, best: &mut (StationId, f64)) {
        let node = &self.nodes[i];
        if metric.rect_lower_bound(query, node.min, node.max) > best.1 {
            return;
        }

        let d = metric.distance(query, node.cell);
        if d < best.1 || (d == best.1 && node.station < best.0) {
            *best = (node.station, d);
        }

        let (near, far) = if node.axis.of(query) <= node.axis.of(node.cell) {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        if let Some(near) = near {
            self.search(near, query, metric, best);
        }
        if let Some(far) = far {
            self.search(far, query, metric, best);
        }
    }
}

fn build_subtree(nodes: &mut Vec<Node>, points: &mut [(StationId, Cell)], depth: usize) -> usize {
    let axis = Axis::at_depth(depth);
    points.sort_unstable_by_key(|&(id, cell)| (axis.of(cell), id));
    let mid = points.len() / 2;
    let (station, cell) = points[mid];

    let mut min = cell;
    let mut max = cell;
    for &(_, p) in points.iter() {
        min = Cell::new(min.row.min(p.row), min.col.min(p.col));
        max = Cell::new(max.row.max(p.row), max.col.max(p.col));
    }

    let index = nodes.len();
    nodes.push(Node {
        station,
        cell,
        axis,
        left: None,
        right: None,
        min,
        max,
    });

    let (lower, rest) = points.split_at_mut(mid);
    let upper = &mut rest[1..];
    let left = (!lower.is_empty()).then(|| build_subtree(nodes, lower, depth + 1));
    let right = (!upper.is_empty()).then(|| build_subtree(nodes, upper, depth + 1));
    nodes[index].left = left;
    nodes[index].right = right;
    index
}

/// Run the spatial-tree solver: build a tree, then query every passable
/// cell.
pub fn spatial_tree(
    grid: &CityGrid,
    stations: &StationSet,
    metric: Metric,
) -> Result<CoverageMap, CoverageError> {
    let tree = KdTree::from_stations(stations)?;
    Ok(spatial_tree_with_index(grid, &tree, metric))
}

/// Query every passable cell against a prebuilt tree.
///
/// Lets a caller reuse one tree across several queries on the same
/// station set.
pub fn spatial_tree_with_index(grid: &CityGrid, tree: &KdTree, metric: Metric) -> CoverageMap {
    let mut map = CoverageMap::unreached(grid);
    for (i, cell) in grid.cells().enumerate() {
        if grid.is_passable_at(i) {
            let (station, distance) = tree.nearest(cell, metric);
            map.cover(i, distance, station);
        }
    }
    debug!(
        solver = "spatial_tree",
        %metric,
        cells = grid.passable_count(),
        stations = tree.len(),
        depth = tree.depth(),
        "queries complete"
    );
    map
}
