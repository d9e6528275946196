//! Boustrophedon sweep sequencing.
//!
//! The visiting order is load-bearing: the cost model charges depend on the
//! exact sequence, so tests assert against it directly.

use crate::models::{Cell, Plot};

/// What follows the cell just yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another cell remains in the current row.
    NextCell,
    /// The current row is done; the sweep moves to the next row.
    NextRow,
    /// The sweep is complete.
    End,
}

/// One step of the sweep: the cell to visit and what comes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    pub cell: Cell,
    pub advance: Advance,
}

/// Lazy generator of the full raster order over a plot.
///
/// Starts at (1,1), traverses x across the row, and on reaching the far end
/// bumps y, reverses direction, and continues from the same x. Rows
/// alternate direction: row 1 runs west to east, row 2 east to west.
#[derive(Debug, Clone)]
pub struct SweepPath {
    plot: Plot,
    x: u32,
    y: u32,
    eastbound: bool,
    done: bool,
}

impl SweepPath {
    pub fn new(plot: Plot) -> Self {
        Self {
            plot,
            x: 1,
            y: 1,
            eastbound: true,
            done: plot.length == 0 || plot.width == 0,
        }
    }

    fn at_row_end(&self) -> bool {
        if self.eastbound {
            self.x == self.plot.length
        } else {
            self.x == 1
        }
    }
}

impl Iterator for SweepPath {
    type Item = SweepStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cell = Cell::new(self.x, self.y);
        let advance = if !self.at_row_end() {
            if self.eastbound {
                self.x += 1;
            } else {
                self.x -= 1;
            }
            Advance::NextCell
        } else if self.y < self.plot.width {
            // Row transition keeps x and reverses the horizontal direction.
            self.y += 1;
            self.eastbound = !self.eastbound;
            Advance::NextRow
        } else {
            self.done = true;
            Advance::End
        };

        Some(SweepStep { cell, advance })
    }
}
