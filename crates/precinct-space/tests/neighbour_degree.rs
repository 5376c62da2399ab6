use precinct_core::{Adjacency, Cell};
use precinct_space::{neighbours_flat, passable_neighbours, CityGrid, StationSet};
use proptest::prelude::*;

fn max_degree(grid: &CityGrid, adj: Adjacency) -> usize {
    grid.passable_cells()
        .filter_map(|cell| grid.index_of(cell))
        .map(|i| neighbours_flat(grid, i, adj).len())
        .max()
        .unwrap_or(0)
}

#[test]
fn max_neighbour_degree_on_open_grids() {
    let one = CityGrid::open(1, 1).unwrap();
    assert_eq!(max_degree(&one, Adjacency::Four), 0);
    assert_eq!(max_degree(&one, Adjacency::Eight), 0);

    let strip = CityGrid::open(1, 4).unwrap();
    assert_eq!(max_degree(&strip, Adjacency::Four), 2);
    assert_eq!(max_degree(&strip, Adjacency::Eight), 2);

    let two = CityGrid::open(2, 2).unwrap();
    assert_eq!(max_degree(&two, Adjacency::Four), 2);
    assert_eq!(max_degree(&two, Adjacency::Eight), 3);

    let three = CityGrid::open(3, 3).unwrap();
    assert_eq!(max_degree(&three, Adjacency::Four), 4);
    assert_eq!(max_degree(&three, Adjacency::Eight), 8);
}

#[test]
fn walls_reduce_degree() {
    let (grid, _) = CityGrid::parse(
        "
        ...
        .#.
        ...
        ",
    )
    .unwrap();
    // The centre is blocked, so every ring cell loses it as a neighbour.
    assert_eq!(max_degree(&grid, Adjacency::Four), 2);
    assert_eq!(max_degree(&grid, Adjacency::Eight), 4);
    // A blocked source still lists its passable neighbours.
    let centre = grid.index_of(Cell::new(1, 1)).unwrap();
    assert_eq!(neighbours_flat(&grid, centre, Adjacency::Four).len(), 4);
    assert_eq!(
        passable_neighbours(&grid, Cell::new(0, 1), Adjacency::Eight).len(),
        4
    );
}

proptest! {
    #[test]
    fn parse_agrees_with_with_blocked(
        rows in 1usize..6,
        cols in 1usize..6,
        mask in proptest::collection::vec(any::<bool>(), 36),
    ) {
        let mut text = String::new();
        let mut blocked = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                if mask[r * 6 + c] {
                    text.push('#');
                    blocked.push(Cell::new(r as i32, c as i32));
                } else {
                    text.push('.');
                }
            }
            text.push('\n');
        }
        let parsed = CityGrid::parse(&text).map(|(g, _)| g);
        let built = CityGrid::with_blocked(rows, cols, blocked);
        prop_assert_eq!(parsed, built);
    }

    #[test]
    fn every_passable_cell_can_hold_a_station(
        rows in 1usize..6,
        cols in 1usize..6,
        blocked_seed in proptest::collection::vec((0i32..6, 0i32..6), 0..8),
    ) {
        let blocked = blocked_seed
            .into_iter()
            .filter(|&(r, c)| (r as usize) < rows && (c as usize) < cols)
            .map(|(r, c)| Cell::new(r, c));
        if let Ok(grid) = CityGrid::with_blocked(rows, cols, blocked) {
            let stations = StationSet::new(&grid, grid.passable_cells()).unwrap();
            prop_assert_eq!(stations.len(), grid.passable_count());
        }
    }
}
