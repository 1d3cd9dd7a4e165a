use std::fmt::{self, Write};

use crate::grid::{Coord, Direction, Grid};

pub const DEFAULT_PATH_GLYPH: char = '.';

/// Draws a grid as ASCII art, four characters per cell.
///
/// Each row becomes a line of north walls and corners followed by a line of
/// cell interiors and east walls. The west edge and the south edge are always
/// closed. Cells on the path are marked with `path_glyph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    path_glyph: char,
}

impl Renderer {
    pub fn new(path_glyph: char) -> Self {
        Renderer { path_glyph }
    }

    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.rows() * 2 + 1) * (grid.columns() * 4 + 2));
        // Writing into a `String` cannot fail.
        let _ = self.write(grid, &mut out);
        out
    }

    pub fn write(&self, grid: &Grid, out: &mut impl Write) -> fmt::Result {
        for row in 0..grid.rows() {
            out.write_char('+')?;
            for column in 0..grid.columns() {
                let cell = grid.cell(Coord::new(row, column));
                if cell.has_wall(Direction::North) {
                    out.write_str("---+")?;
                } else {
                    out.write_str("   +")?;
                }
            }
            out.write_char('\n')?;

            out.write_char('|')?;
            for column in 0..grid.columns() {
                let cell = grid.cell(Coord::new(row, column));
                let mark = if cell.is_on_path() {
                    self.path_glyph
                } else {
                    ' '
                };
                let east = if cell.has_wall(Direction::East) {
                    '|'
                } else {
                    ' '
                };
                write!(out, " {} {}", mark, east)?;
            }
            out.write_char('\n')?;
        }

        out.write_char('+')?;
        for _ in 0..grid.columns() {
            out.write_str("---+")?;
        }
        out.write_char('\n')
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_PATH_GLYPH)
    }
}
