//! Forward-only row-major cursor over a grid

use std::iter::FusedIterator;

use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

/// Single-pass cursor yielding every slot of a grid as a [`Cell`]
///
/// Holds a shared borrow of the grid, so the grid cannot change while the
/// cursor is alive. There is no rewind; build a new iterator to restart.
#[derive(Debug, Clone)]
pub struct GridIterator<'a, T> {
    grid: &'a Grid<T>,
    row: usize,
    column: usize,
}

impl<'a, T> GridIterator<'a, T> {
    /// Start a cursor at `(0, 0)`
    pub const fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            row: 0,
            column: 0,
        }
    }

    fn remaining(&self) -> usize {
        let columns = self.grid.columns();
        let consumed = self.row.saturating_mul(columns) + self.column;
        self.grid.slot_count().saturating_sub(consumed)
    }
}

impl<'a, T> Iterator for GridIterator<'a, T> {
    type Item = Cell<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        if self.row >= grid.rows() || grid.columns() == 0 {
            return None;
        }

        let value = grid.get_item(self.row, self.column).ok()?;
        let cell = Cell::new(self.row, self.column, value);

        self.column += 1;
        if self.column >= grid.columns() {
            self.column = 0;
            self.row += 1;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for GridIterator<'_, T> {}

impl<T> FusedIterator for GridIterator<'_, T> {}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = Cell<&'a T>;
    type IntoIter = GridIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        GridIterator::new(self)
    }
}
