use strum::{EnumIter, IntoEnumIterator};

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(row: usize, column: usize) -> Coord {
        Coord { row, column }
    }

    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }
}

// Declaration order is the order neighbors are tried in: East, South, North, West.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    East,
    South,
    North,
    West,
}

impl Direction {
    /// `(row, column)` step taken when moving in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
        }
    }

    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::iter().find(|direction| {
            let (dr, dc) = direction.offset();
            from.row as isize + dr == to.row as isize
                && from.column as isize + dc == to.column as isize
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    carvable: bool,
    solvable: bool,
    on_path: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
            carvable: true,
            solvable: true,
            on_path: false,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    fn clear_wall(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = false,
            Direction::South => self.south = false,
            Direction::East => self.east = false,
            Direction::West => self.west = false,
        }
    }

    pub fn is_carvable(&self) -> bool {
        self.carvable
    }

    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new()
    }
}

/// Row-major grid of cells. Every wall removal goes through
/// [`Grid::open_wall_between`], which keeps facing walls in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Result<Grid, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        let cell_count = rows
            .checked_mul(columns)
            .ok_or(MazeError::InvalidDimensions { rows, columns })?;

        Ok(Grid {
            rows,
            columns,
            cells: vec![Cell::new(); cell_count],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn origin(&self) -> Coord {
        Coord::new(0, 0)
    }

    pub fn terminal(&self) -> Coord {
        Coord::new(self.rows - 1, self.columns - 1)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let columns = self.columns;
        (0..self.cells.len()).map(move |i| Coord::new(i / columns, i % columns))
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index(coord)]
    }

    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let i = self.index(coord);
        &mut self.cells[i]
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(
            coord.row < self.rows && coord.column < self.columns,
            "cell coordinates are out of bounds"
        );

        coord.row * self.columns + coord.column
    }

    pub fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }

    /// In bounds and not yet absorbed into the spanning tree.
    pub fn is_carvable(&self, row: isize, column: isize) -> bool {
        self.in_bounds(row, column)
            && self
                .cell(Coord::new(row as usize, column as usize))
                .is_carvable()
    }

    /// In bounds, not yet explored by the solver, and enterable when moving
    /// in `arrival`: the wall facing back the way we came must be open.
    pub fn is_solvable(&self, row: isize, column: isize, arrival: Direction) -> bool {
        if !self.in_bounds(row, column) {
            return false;
        }

        let cell = self.cell(Coord::new(row as usize, column as usize));
        cell.is_solvable() && !cell.has_wall(arrival.opposite())
    }

    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = coord.row as isize + dr;
        let column = coord.column as isize + dc;

        if self.in_bounds(row, column) {
            Some(Coord::new(row as usize, column as usize))
        } else {
            None
        }
    }

    pub fn open_wall_between(&mut self, a: Coord, b: Coord) {
        let direction = Direction::between(a, b);
        debug_assert!(direction.is_some(), "cells {:?} and {:?} are not adjacent", a, b);

        if let Some(direction) = direction {
            self.cell_mut(a).clear_wall(direction);
            self.cell_mut(b).clear_wall(direction.opposite());
        }
    }

    pub fn is_open_between(&self, a: Coord, b: Coord) -> bool {
        match Direction::between(a, b) {
            Some(direction) => !self.cell(a).has_wall(direction),
            None => false,
        }
    }

    /// Counts each open link once, looking only east and south.
    pub fn open_links(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&direction| {
                        self.neighbor(coord, direction).is_some()
                            && !self.cell(coord).has_wall(direction)
                    })
                    .count()
            })
            .sum()
    }

    pub fn mark_carved(&mut self, coord: Coord) {
        self.cell_mut(coord).carvable = false;
    }

    pub fn mark_explored(&mut self, coord: Coord) {
        self.cell_mut(coord).solvable = false;
    }

    pub fn restore_explored(&mut self, coord: Coord) {
        self.cell_mut(coord).solvable = true;
    }

    pub fn set_on_path(&mut self, coord: Coord, on_path: bool) {
        self.cell_mut(coord).on_path = on_path;
    }
}
