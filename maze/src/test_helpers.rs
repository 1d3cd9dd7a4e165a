use std::collections::VecDeque;

use rand::RngCore;
use strum::IntoEnumIterator;

use crate::grid::{Coord, Direction, Grid};

/// Always yields zero, so every random choice picks the first candidate.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn index(grid: &Grid, coord: Coord) -> usize {
    coord.row * grid.columns() + coord.column
}

/// Breadth-first walk over open walls, recording where each cell was
/// reached from.
fn open_wall_parents(grid: &Grid, start: Coord) -> Vec<Option<Coord>> {
    let mut visited = vec![false; grid.cell_count()];
    let mut parents = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();

    visited[index(grid, start)] = true;
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        for direction in Direction::iter() {
            if grid.cell(coord).has_wall(direction) {
                continue;
            }
            let neighbor = grid
                .neighbor(coord, direction)
                .expect("open walls should never face outside the grid");
            let i = index(grid, neighbor);
            if !visited[i] {
                visited[i] = true;
                parents[i] = Some(coord);
                queue.push_back(neighbor);
            }
        }
    }

    parents
}

pub fn assert_spanning_tree(grid: &Grid) {
    assert_eq!(
        grid.open_links(),
        grid.cell_count() - 1,
        "a spanning tree has exactly one link fewer than it has cells"
    );

    let origin = grid.origin();
    let parents = open_wall_parents(grid, origin);
    let reached = grid
        .coords()
        .filter(|&coord| coord == origin || parents[index(grid, coord)].is_some())
        .count();

    assert_eq!(reached, grid.cell_count(), "all cells should be connected");
}

/// The unique route between two cells of a tree, found independently of the
/// solver.
pub fn tree_path(grid: &Grid, from: Coord, to: Coord) -> Vec<Coord> {
    let parents = open_wall_parents(grid, from);
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        current = parents[index(grid, current)].expect("target should be reachable");
        path.push(current);
    }

    path.reverse();
    path
}

pub fn assert_valid_path(grid: &Grid, path: &[Coord]) {
    assert!(!path.is_empty(), "path should never be empty");
    assert!(path.len() <= grid.cell_count());
    assert_eq!(path.first(), Some(&grid.origin()));
    assert_eq!(path.last(), Some(&grid.terminal()));

    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{:?} and {:?} are not neighbors",
            pair[0],
            pair[1]
        );
        assert!(
            grid.is_open_between(pair[0], pair[1]),
            "a wall separates {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Every wall must read the same from both of the cells it separates.
pub fn assert_walls_agree(grid: &Grid) {
    for coord in grid.coords() {
        for direction in Direction::iter() {
            if let Some(neighbor) = grid.neighbor(coord, direction) {
                assert_eq!(
                    grid.cell(coord).has_wall(direction),
                    grid.cell(neighbor).has_wall(direction.opposite()),
                    "walls disagree between {:?} and {:?}",
                    coord,
                    neighbor
                );
            }
        }
    }
}
