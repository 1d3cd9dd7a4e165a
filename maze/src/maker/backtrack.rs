use log::debug;
use rand::Rng;

use super::super::grid::Coord;
use super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

/// A pending visit: carve onward from `cell`, with `links` walls already
/// opened along the chain that led here.
#[derive(Clone, Copy, Debug)]
struct Frame {
    cell: Coord,
    links: usize,
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) {
        let target = self.grid.cell_count() - 1;
        let initial_cell = self.grid.origin();
        self.visit_cell(initial_cell);

        let mut stack = vec![Frame {
            cell: initial_cell,
            links: 0,
        }];
        let mut peak = stack.len();

        while let Some(Frame { cell, links }) = stack.pop() {
            if links >= target {
                continue;
            }

            if let Some(next) = self.pick_neighbor(cell) {
                self.visit_cell(next);
                self.remove_wall_between(cell, next);

                // The child is resolved first, then `cell` is tried again
                // for any siblings still left.
                stack.push(Frame {
                    cell,
                    links: links + 1,
                });
                stack.push(Frame {
                    cell: next,
                    links: links + 1,
                });
                peak = peak.max(stack.len());
            }
        }

        debug!(
            "Carved {} of {} links in a {}x{} grid (peak stack depth {}).",
            self.carved(),
            target,
            self.grid.rows(),
            self.grid.columns(),
            peak
        );
    }
}
