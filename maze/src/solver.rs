use log::debug;
use strum::IntoEnumIterator;

use crate::error::MazeError;
use crate::grid::{Coord, Direction, DirectionIter, Grid};

pub type Path = Vec<Coord>;

/// One level of the search: the cell being explored and the directions it
/// has yet to try.
struct Frame {
    cell: Coord,
    directions: DirectionIter,
}

impl Frame {
    fn new(cell: Coord) -> Self {
        Frame {
            cell,
            directions: Direction::iter(),
        }
    }
}

/// Depth-first search from the origin to the far corner.
///
/// Only the solving-visited and on-path flags of the grid are touched; walls
/// are read, never written.
pub struct PathFinder<'a> {
    grid: &'a mut Grid,
    path: Path,
    backtracks: usize,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        PathFinder {
            grid,
            path: Vec::new(),
            backtracks: 0,
        }
    }

    pub fn find_path(mut self) -> Result<Path, MazeError> {
        let origin = self.grid.origin();
        let terminal = self.grid.terminal();

        self.grid.mark_explored(origin);
        self.path.push(origin);

        if origin == terminal {
            return Ok(self.path);
        }

        let mut stack = vec![Frame::new(origin)];

        while let Some(frame) = stack.last_mut() {
            let cell = frame.cell;

            let Some(direction) = frame.directions.next() else {
                stack.pop();
                self.grid.restore_explored(cell);
                if cell != origin {
                    self.grid.set_on_path(cell, false);
                    self.path.pop();
                    self.backtracks += 1;
                }
                continue;
            };

            let (dr, dc) = direction.offset();
            let row = cell.row as isize + dr;
            let column = cell.column as isize + dc;

            if !self.grid.is_solvable(row, column, direction) {
                continue;
            }

            let next = Coord::new(row as usize, column as usize);
            self.path.push(next);
            self.grid.mark_explored(next);
            self.grid.set_on_path(next, true);

            if next == terminal {
                debug!(
                    "Found a path of {} cells after {} backtracks.",
                    self.path.len(),
                    self.backtracks
                );
                return Ok(self.path);
            }

            stack.push(Frame::new(next));
        }

        debug!(
            "Exhausted the search after {} backtracks without reaching {:?}.",
            self.backtracks, terminal
        );
        Err(MazeError::Unsolvable)
    }
}

pub fn solve(grid: &mut Grid) -> Result<Path, MazeError> {
    PathFinder::new(grid).find_path()
}
