//! Axis mirroring of a managed grid

use log::debug;

use crate::spatial::grid::Grid;

/// Owns a grid and replaces it with mirrored copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformer<T> {
    grid: Grid<T>,
}

impl<T> Transformer<T> {
    /// Take ownership of the grid to transform
    pub const fn new(grid: Grid<T>) -> Self {
        Self { grid }
    }

    /// The managed grid
    pub const fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Release the managed grid
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Mirror left to right: `(row, column)` moves to `(row, columns - 1 - column)`
    pub fn flip_horizontal(&mut self) {
        let columns = self.grid.columns();
        self.remap(|row, column| (row, columns - 1 - column));
        debug!("flipped {:?} grid horizontally", self.grid.dimensions());
    }

    /// Mirror top to bottom: `(row, column)` moves to `(rows - 1 - row, column)`
    pub fn flip_vertical(&mut self) {
        let rows = self.grid.rows();
        self.remap(|row, column| (rows - 1 - row, column));
        debug!("flipped {:?} grid vertically", self.grid.dimensions());
    }

    fn remap<F>(&mut self, destination: F)
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let (rows, columns) = self.grid.dimensions();
        let source = std::mem::replace(&mut self.grid, Grid::new(rows, columns));

        for cell in source.into_cells() {
            let (row, column) = destination(cell.row, cell.column);
            self.grid.place(row, column, cell.value);
        }
    }
}
