pub mod config;
pub mod error;
pub mod grid;
pub mod maker;
pub mod render;
pub mod solver;

#[cfg(test)]
mod test_helpers;

use std::fmt;

use rand::Rng;

use error::MazeError;
use grid::{Coord, Grid};
use maker::MazeMaker;
use render::Renderer;
use solver::Path;

/// A carved maze together with its solution.
///
/// Building one runs the whole pipeline: carve a spanning tree, search it for
/// the route from the top-left corner to the bottom-right one, then flag the
/// cells along that route. `Display` draws the result.
#[derive(Clone)]
pub struct Maze {
    grid: Grid,
    path: Path,
    renderer: Renderer,
}

impl Maze {
    pub fn new(rows: usize, columns: usize, seed: u64) -> Result<Self, MazeError> {
        let maker = MazeMaker::new(rows, columns, seed)?;
        Self::from_grid(maker.into_grid())
    }

    pub fn with_rng<R: Rng>(rows: usize, columns: usize, rng: R) -> Result<Self, MazeError> {
        let maker = MazeMaker::with_rng(rows, columns, rng)?;
        Self::from_grid(maker.into_grid())
    }

    /// Solves an already carved grid.
    pub fn from_grid(mut grid: Grid) -> Result<Self, MazeError> {
        let path = solver::solve(&mut grid)?;
        let mut maze = Maze {
            grid,
            path,
            renderer: Renderer::default(),
        };
        maze.mark_path();
        Ok(maze)
    }

    pub fn with_path_glyph(mut self, path_glyph: char) -> Self {
        self.renderer = Renderer::new(path_glyph);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells from the top-left corner to the bottom-right one, in order.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    fn mark_path(&mut self) {
        for &coord in &self.path {
            self.grid.set_on_path(coord, true);
        }
    }

    pub fn log(&self) -> String {
        self.renderer.render(&self.grid)
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.write(&self.grid, f)
    }
}
