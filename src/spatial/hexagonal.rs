//! Split-cell grid approximating a hexagonal tiling on rectangular storage
//!
//! Each `(row, column)` location carries two half-cells addressed by
//! `index` in `0..HEX_SUBCELLS`. Odd-offset rendering shifts even rows by one
//! character so adjacent rows interlock like hexagons.

use std::fmt;

use log::debug;
use ndarray::Array3;

use crate::io::configuration::{EMPTY_CELL_SYMBOL, HEX_SUBCELLS};
use crate::io::error::{GridError, Result};

/// Grid of locations holding two optional half-cell values each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagonalGrid<T> {
    cells: Array3<Option<T>>,
}

impl<T> HexagonalGrid<T> {
    /// Create a grid with every half-cell empty
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: Array3::default((rows, columns, HEX_SUBCELLS)),
        }
    }

    /// Create a grid with every half-cell holding a copy of `value`
    pub fn filled(rows: usize, columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: Array3::from_elem((rows, columns, HEX_SUBCELLS), Some(value)),
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    /// Get the number of columns in the grid
    pub fn columns(&self) -> usize {
        self.cells.dim().1
    }

    /// Grid dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        let (rows, columns, _) = self.cells.dim();
        (rows, columns)
    }

    /// Check whether a `(row, column, index)` triple lies inside the grid
    pub fn contains(&self, row: usize, column: usize, index: usize) -> bool {
        row < self.rows() && column < self.columns() && index < HEX_SUBCELLS
    }

    /// Store a value in one half-cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any coordinate is outside the grid
    pub fn add_item(&mut self, row: usize, column: usize, index: usize, value: T) -> Result<()> {
        *self.slot_mut(row, column, index)? = Some(value);
        Ok(())
    }

    /// Read one half-cell, `None` when empty
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any coordinate is outside the grid
    pub fn get_item(&self, row: usize, column: usize, index: usize) -> Result<Option<&T>> {
        self.cells
            .get((row, column, index))
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(row, column, index))
    }

    /// Empty one half-cell, handing back the value it held
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if any coordinate is outside the grid
    pub fn remove_item(&mut self, row: usize, column: usize, index: usize) -> Result<Option<T>> {
        Ok(self.slot_mut(row, column, index)?.take())
    }

    /// Empty both half-cells at every location
    pub fn clear_grid(&mut self) {
        for slot in &mut self.cells {
            *slot = None;
        }
    }

    /// Set every half-cell to a copy of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in &mut self.cells {
            *slot = Some(value.clone());
        }
    }

    /// Reshape the grid, keeping both half-cells in the overlapping rectangle
    pub fn resize_grid(&mut self, new_rows: usize, new_columns: usize) {
        let (old_rows, old_columns) = self.dimensions();
        let mut resized: Array3<Option<T>> =
            Array3::default((new_rows, new_columns, HEX_SUBCELLS));

        for row in 0..old_rows.min(new_rows) {
            for column in 0..old_columns.min(new_columns) {
                for index in 0..HEX_SUBCELLS {
                    if let (Some(src), Some(dst)) = (
                        self.cells.get_mut((row, column, index)),
                        resized.get_mut((row, column, index)),
                    ) {
                        *dst = src.take();
                    }
                }
            }
        }

        self.cells = resized;
        debug!(
            "resized split-cell grid from {old_rows}x{old_columns} to {new_rows}x{new_columns}"
        );
    }

    /// Visit every half-cell, row-major over locations then by index
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(Option<&T>, usize, usize, usize),
    {
        for ((row, column, index), slot) in self.cells.indexed_iter() {
            visit(slot.as_ref(), row, column, index);
        }
    }

    /// Build a grid of the same shape from a per-half-cell transform
    pub fn map<U, F>(&self, mut transform: F) -> HexagonalGrid<U>
    where
        F: FnMut(Option<&T>, usize, usize, usize) -> Option<U>,
    {
        let mut mapped = HexagonalGrid::new(self.rows(), self.columns());
        for ((row, column, index), slot) in self.cells.indexed_iter() {
            if let Some(dst) = mapped.cells.get_mut((row, column, index)) {
                *dst = transform(slot.as_ref(), row, column, index);
            }
        }
        mapped
    }

    /// First occupied half-cell value matching the predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize, usize, usize) -> bool,
    {
        self.cells
            .indexed_iter()
            .find_map(|((row, column, index), slot)| {
                slot.as_ref()
                    .filter(|&value| predicate(value, row, column, index))
            })
    }

    fn slot_mut(&mut self, row: usize, column: usize, index: usize) -> Result<&mut Option<T>> {
        let error = self.out_of_bounds(row, column, index);
        self.cells.get_mut((row, column, index)).ok_or(error)
    }

    fn out_of_bounds(&self, row: usize, column: usize, index: usize) -> GridError {
        GridError::IndexOutOfBounds {
            row,
            column,
            index: Some(index),
            dimensions: self.dimensions(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for HexagonalGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.outer_iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            if row_index.is_multiple_of(2) {
                f.write_str(" ")?;
            }
            for (column, halves) in row.outer_iter().enumerate() {
                if column > 0 {
                    f.write_str("  ")?;
                }
                for (index, slot) in halves.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    match slot {
                        Some(value) => write!(f, "{value}")?,
                        None => f.write_str(EMPTY_CELL_SYMBOL)?,
                    }
                }
            }
        }
        Ok(())
    }
}
