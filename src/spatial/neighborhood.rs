//! Moore-neighborhood lookup clipped to grid bounds

use std::ops::Range;

use crate::io::error::{Result, out_of_bounds};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

/// Get the clipped window spans around a position
///
/// Returns row and column ranges covering `[center - radius, center + radius]`
/// on each axis, clamped to `[0, rows) x [0, columns)`. No wraparound.
pub fn window_spans(
    dimensions: (usize, usize),
    row: usize,
    column: usize,
    radius: usize,
) -> (Range<usize>, Range<usize>) {
    let row_start = row.saturating_sub(radius);
    let col_start = column.saturating_sub(radius);

    let row_end = row.saturating_add(radius).saturating_add(1).min(dimensions.0);
    let col_end = column
        .saturating_add(radius)
        .saturating_add(1)
        .min(dimensions.1);

    (row_start..row_end, col_start..col_end)
}

/// Neighboring cells of one grid coordinate
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a, T> {
    grid: &'a Grid<T>,
    row: usize,
    column: usize,
}

impl<'a, T> Neighborhood<'a, T> {
    /// Anchor a neighborhood at `(row, column)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] if the center lies outside the grid
    pub fn new(grid: &'a Grid<T>, row: usize, column: usize) -> Result<Self> {
        if !grid.contains(row, column) {
            return Err(out_of_bounds(row, column, grid.dimensions()));
        }
        Ok(Self { grid, row, column })
    }

    /// Center coordinate as `[row, column]`
    pub const fn position(&self) -> [usize; 2] {
        [self.row, self.column]
    }

    /// The up to 8 cells surrounding the center
    ///
    /// Interior coordinates yield 8 cells, edges 5, corners 3. Cells come in
    /// row-major order over the clipped 3x3 window.
    pub fn get_neighbors(&self) -> Vec<Cell<&'a T>> {
        self.get_neighbors_within(1)
    }

    /// Every cell in the clipped `(2r+1)x(2r+1)` window except the center
    pub fn get_neighbors_within(&self, radius: usize) -> Vec<Cell<&'a T>> {
        let grid = self.grid;
        let (rows, cols) = window_spans(grid.dimensions(), self.row, self.column, radius);

        let mut neighbors = Vec::with_capacity((rows.len() * cols.len()).saturating_sub(1));
        for row in rows {
            for column in cols.clone() {
                if row == self.row && column == self.column {
                    continue;
                }
                if let Ok(cell) = grid.cell(row, column) {
                    neighbors.push(cell);
                }
            }
        }
        neighbors
    }
}
