pub mod backtrack;

use rand::prelude::{IndexedRandom, Rng};
use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

use crate::error::MazeError;
use crate::grid::{Coord, Direction, Grid};

use backtrack::Backtrack;

/// Carves a perfect maze into a freshly walled grid.
///
/// The random source is injected so that a seed, or a scripted source in
/// tests, reproduces the same layout.
pub struct MazeMaker<R = StdRng> {
    pub grid: Grid,
    pub rng: R,
    carved: usize,
}

impl MazeMaker<StdRng> {
    pub fn new(rows: usize, columns: usize, seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(rows, columns, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeMaker<R> {
    pub fn with_rng(rows: usize, columns: usize, rng: R) -> Result<Self, MazeError> {
        let grid = Grid::new(rows, columns)?;
        let mut maker = MazeMaker {
            grid,
            rng,
            carved: 0,
        };
        maker.backtrack();
        Ok(maker)
    }

    /// Number of walls opened so far.
    pub fn carved(&self) -> usize {
        self.carved
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn get_carvable_neighbors(&self, cell: Coord) -> Vec<Coord> {
        let mut valid_neighbors = Vec::new();

        for direction in Direction::iter() {
            let (dr, dc) = direction.offset();
            let row = cell.row as isize + dr;
            let column = cell.column as isize + dc;

            if self.grid.is_carvable(row, column) {
                valid_neighbors.push(Coord::new(row as usize, column as usize));
            }
        }

        valid_neighbors
    }

    fn pick_neighbor(&mut self, cell: Coord) -> Option<Coord> {
        let neighbors = self.get_carvable_neighbors(cell);

        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Coord) {
        self.grid.mark_carved(cell);
    }

    fn remove_wall_between(&mut self, cell_1: Coord, cell_2: Coord) {
        self.grid.open_wall_between(cell_1, cell_2);
        self.carved += 1;
    }
}
