//! Distance metrics and the grid adjacency rules they induce.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;
use crate::id::Cell;

/// Offsets of the 4-connected neighbourhood: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A distance function between two grid cells.
///
/// All variants are symmetric, non-negative, and zero on identical
/// cells. Manhattan and Chebyshev are integral and coincide with the
/// graph geodesic of a 4- or 8-connected open grid respectively;
/// Euclidean has no grid-graph counterpart.
///
/// # Examples
///
/// ```
/// use precinct_core::{Cell, Metric};
///
/// let a = Cell::new(0, 0);
/// let b = Cell::new(3, 4);
/// assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
/// assert_eq!(Metric::Chebyshev.distance(a, b), 4.0);
/// assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// L1: `|Δrow| + |Δcol|`.
    Manhattan,
    /// L-inf: `max(|Δrow|, |Δcol|)`.
    Chebyshev,
    /// L2: `sqrt(Δrow² + Δcol²)`.
    Euclidean,
}

impl Metric {
    /// Every supported metric, in declaration order.
    pub const ALL: [Metric; 3] = [Metric::Manhattan, Metric::Chebyshev, Metric::Euclidean];

    /// Distance between two cells.
    pub fn distance(self, a: Cell, b: Cell) -> f64 {
        let (dr, dc) = a.abs_diff(b);
        self.combine(dr, dc)
    }

    /// Lower bound on the distance from `cell` to any cell inside the
    /// axis-aligned box `[min, max]` (inclusive on both corners).
    ///
    /// Zero when `cell` lies inside the box. Never exceeds the true
    /// distance to any point of the box, which is what makes it safe for
    /// branch-and-bound pruning.
    pub fn rect_lower_bound(self, cell: Cell, min: Cell, max: Cell) -> f64 {
        let dr = axis_gap(cell.row, min.row, max.row);
        let dc = axis_gap(cell.col, min.col, max.col);
        self.combine(dr, dc)
    }

    /// The grid adjacency whose unit-step BFS reproduces this metric on
    /// an obstacle-free grid, if any.
    pub fn adjacency(self) -> Option<Adjacency> {
        match self {
            Self::Manhattan => Some(Adjacency::Four),
            Self::Chebyshev => Some(Adjacency::Eight),
            Self::Euclidean => None,
        }
    }

    /// Whether every distance this metric produces is a whole number.
    pub fn is_integral(self) -> bool {
        !matches!(self, Self::Euclidean)
    }

    /// Lower-case name, matching [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Euclidean => "euclidean",
        }
    }

    fn combine(self, dr: u32, dc: u32) -> f64 {
        match self {
            Self::Manhattan => f64::from(dr) + f64::from(dc),
            Self::Chebyshev => f64::from(dr.max(dc)),
            Self::Euclidean => {
                let dr = f64::from(dr);
                let dc = f64::from(dc);
                (dr * dr + dc * dc).sqrt()
            }
        }
    }
}

/// Distance from `v` to the closed interval `[lo, hi]`.
fn axis_gap(v: i32, lo: i32, hi: i32) -> u32 {
    if v < lo {
        lo.abs_diff(v)
    } else if v > hi {
        v.abs_diff(hi)
    } else {
        0
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Self::Manhattan),
            "chebyshev" | "linf" => Ok(Self::Chebyshev),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            _ => Err(ParseKindError {
                kind: "metric",
                value: s.to_string(),
            }),
        }
    }
}

/// Which moves cost exactly one step on the grid graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// 4-connected: cardinal moves only (consistent with Manhattan).
    Four,
    /// 8-connected: cardinal plus diagonal moves (consistent with Chebyshev).
    Eight,
}

impl Adjacency {
    /// Neighbour offsets `(dr, dc)` in a fixed order: cardinals first,
    /// then diagonals.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }

    /// The metric that measures unit-step path length under this adjacency.
    pub fn metric(self) -> Metric {
        match self {
            Self::Four => Metric::Manhattan,
            Self::Eight => Metric::Chebyshev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    #[test]
    fn distances_from_center_of_three_by_three() {
        let center = c(1, 1);
        let corner = c(0, 0);
        assert_eq!(Metric::Chebyshev.distance(center, corner), 1.0);
        assert_eq!(Metric::Manhattan.distance(center, corner), 2.0);
        assert!((Metric::Euclidean.distance(center, corner) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn adjacency_round_trips_through_metric() {
        assert_eq!(Metric::Manhattan.adjacency(), Some(Adjacency::Four));
        assert_eq!(Metric::Chebyshev.adjacency(), Some(Adjacency::Eight));
        assert_eq!(Metric::Euclidean.adjacency(), None);
        assert_eq!(Adjacency::Four.metric(), Metric::Manhattan);
        assert_eq!(Adjacency::Eight.metric(), Metric::Chebyshev);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for adj in [Adjacency::Four, Adjacency::Eight] {
            for &(dr, dc) in adj.offsets() {
                let step = adj.metric().distance(c(0, 0), c(dr, dc));
                assert_eq!(step, 1.0, "{adj:?} offset ({dr},{dc})");
            }
        }
        assert_eq!(Adjacency::Four.offsets().len(), 4);
        assert_eq!(Adjacency::Eight.offsets().len(), 8);
    }

    #[test]
    fn rect_lower_bound_inside_is_zero() {
        for m in Metric::ALL {
            assert_eq!(m.rect_lower_bound(c(2, 2), c(1, 1), c(3, 3)), 0.0);
        }
    }

    #[test]
    fn rect_lower_bound_outside() {
        // Box rows 0..=1, cols 4..=6; query at (4, 0): gaps (3, 4).
        assert_eq!(Metric::Manhattan.rect_lower_bound(c(4, 0), c(0, 4), c(1, 6)), 7.0);
        assert_eq!(Metric::Chebyshev.rect_lower_bound(c(4, 0), c(0, 4), c(1, 6)), 4.0);
        assert_eq!(Metric::Euclidean.rect_lower_bound(c(4, 0), c(0, 4), c(1, 6)), 5.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Manhattan".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert_eq!("linf".parse::<Metric>().unwrap(), Metric::Chebyshev);
        assert_eq!("l2".parse::<Metric>().unwrap(), Metric::Euclidean);
        let err = "taxicab".parse::<Metric>().unwrap_err();
        assert_eq!(err.kind, "metric");
        for m in Metric::ALL {
            assert_eq!(m.name().parse::<Metric>().unwrap(), m);
        }
    }

    fn arb_metric() -> impl Strategy<Value = Metric> {
        prop_oneof![
            Just(Metric::Manhattan),
            Just(Metric::Chebyshev),
            Just(Metric::Euclidean),
        ]
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            m in arb_metric(),
            ar in -20i32..20, ac in -20i32..20,
            br in -20i32..20, bc in -20i32..20,
            cr in -20i32..20, cc in -20i32..20,
        ) {
            let (a, b, cv) = (c(ar, ac), c(br, bc), c(cr, cc));
            prop_assert_eq!(m.distance(a, a), 0.0);
            prop_assert!(m.distance(a, b) >= 0.0);
            prop_assert_eq!(m.distance(a, b), m.distance(b, a));
            prop_assert!(m.distance(a, cv) <= m.distance(a, b) + m.distance(b, cv) + 1e-9);
        }

        #[test]
        fn rect_lower_bound_never_exceeds_distance(
            m in arb_metric(),
            qr in -10i32..10, qc in -10i32..10,
            r0 in -5i32..5, c0 in -5i32..5,
            h in 0i32..5, w in 0i32..5,
            pr in 0i32..5, pc in 0i32..5,
        ) {
            let min = c(r0, c0);
            let max = c(r0 + h, c0 + w);
            let inside = c(r0 + pr.min(h), c0 + pc.min(w));
            let q = c(qr, qc);
            prop_assert!(m.rect_lower_bound(q, min, max) <= m.distance(q, inside) + 1e-12);
        }
    }
}
