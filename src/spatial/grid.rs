//! Fixed-shape grid container with bounds-checked storage
//!
//! Cells live in a dense row-major `Array2<Option<T>>`, so the store always
//! holds exactly `rows * columns` slots. An empty slot is `None`. Reshaping
//! operations (resize, rotate) allocate a fresh store and move values across.

use std::fmt;

use log::debug;
use ndarray::Array2;

use crate::io::configuration::EMPTY_CELL_SYMBOL;
use crate::io::error::{Result, out_of_bounds, validation_error};
use crate::io::import::validate_shape;
use crate::spatial::cell::Cell;
use crate::spatial::iterator::GridIterator;
use crate::spatial::neighborhood::Neighborhood;

/// Two-dimensional grid of optional values
///
/// Every position-taking operation validates `row < rows` and
/// `column < columns` and returns [`crate::GridError::IndexOutOfBounds`]
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<Option<T>>,
}

impl<T> Grid<T> {
    /// Create a grid with every slot empty
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: Array2::default((rows, columns)),
        }
    }

    /// Create a grid with every slot holding a copy of `value`
    pub fn filled(rows: usize, columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: Array2::from_elem((rows, columns), Some(value)),
        }
    }

    /// Build a grid from nested rows of slots
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::Validation`] if the rows differ in length or
    /// exceed the maximum import dimension
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Result<Self> {
        let shape = validate_shape(&rows)?;
        let slots: Vec<Option<T>> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec(shape, slots)
            .map_err(|error| validation_error(&error))?;

        Ok(Self { cells })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of slots, occupied or not
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of slots currently holding a value
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows() && column < self.columns()
    }

    /// Store a value, overwriting whatever the slot held
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] for coordinates outside the grid
    pub fn add_item(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        *self.slot_mut(row, column)? = Some(value);
        Ok(())
    }

    /// Read the value at a coordinate, `None` for an empty slot
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] for coordinates outside the grid
    pub fn get_item(&self, row: usize, column: usize) -> Result<Option<&T>> {
        self.cells
            .get((row, column))
            .map(Option::as_ref)
            .ok_or_else(|| out_of_bounds(row, column, self.dimensions()))
    }

    /// Empty a slot, handing back the value it held
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] for coordinates outside the grid
    pub fn remove_item(&mut self, row: usize, column: usize) -> Result<Option<T>> {
        Ok(self.slot_mut(row, column)?.take())
    }

    /// Snapshot of a single slot
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] for coordinates outside the grid
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell<&T>> {
        Ok(Cell::new(row, column, self.get_item(row, column)?))
    }

    /// Moore neighborhood (radius 1) of a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] if the center lies outside the grid
    pub fn neighbors(&self, row: usize, column: usize) -> Result<Vec<Cell<&T>>> {
        Ok(Neighborhood::new(self, row, column)?.get_neighbors())
    }

    /// Row-major cursor over every slot
    pub const fn iter(&self) -> GridIterator<'_, T> {
        GridIterator::new(self)
    }

    /// Reshape the grid, keeping values in the overlapping rectangle
    ///
    /// Slots outside `[0, min(rows, new_rows)) x [0, min(columns, new_columns))`
    /// start empty.
    pub fn resize_grid(&mut self, new_rows: usize, new_columns: usize) {
        let (old_rows, old_columns) = self.dimensions();
        let mut resized: Array2<Option<T>> = Array2::default((new_rows, new_columns));

        let copy_rows = old_rows.min(new_rows);
        let copy_columns = old_columns.min(new_columns);
        for row in 0..copy_rows {
            for column in 0..copy_columns {
                if let (Some(src), Some(dst)) = (
                    self.cells.get_mut((row, column)),
                    resized.get_mut((row, column)),
                ) {
                    *dst = src.take();
                }
            }
        }

        self.cells = resized;
        debug!("resized grid from {old_rows}x{old_columns} to {new_rows}x{new_columns}");
    }

    /// Empty every slot without changing the shape
    pub fn clear_grid(&mut self) {
        for slot in &mut self.cells {
            *slot = None;
        }
    }

    /// Visit every slot in row-major order, empty slots included
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(Option<&T>, usize, usize),
    {
        for ((row, column), slot) in self.cells.indexed_iter() {
            visit(slot.as_ref(), row, column);
        }
    }

    /// Build a grid of the same shape from a per-slot transform
    ///
    /// The transform sees slots in the same order as [`Grid::for_each`].
    pub fn map<U, F>(&self, mut transform: F) -> Grid<U>
    where
        F: FnMut(Option<&T>, usize, usize) -> Option<U>,
    {
        let mut mapped = Grid::new(self.rows(), self.columns());
        for ((row, column), slot) in self.cells.indexed_iter() {
            mapped.place(row, column, transform(slot.as_ref(), row, column));
        }
        mapped
    }

    /// Set every slot to a copy of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in &mut self.cells {
            *slot = Some(value.clone());
        }
    }

    /// First occupied value in row-major order matching the predicate
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize, usize) -> bool,
    {
        self.find_cell(predicate).and_then(|cell| cell.value)
    }

    /// Like [`Grid::find`], keeping the coordinates of the match
    pub fn find_cell<P>(&self, mut predicate: P) -> Option<Cell<&T>>
    where
        P: FnMut(&T, usize, usize) -> bool,
    {
        for ((row, column), slot) in self.cells.indexed_iter() {
            if let Some(value) = slot
                && predicate(value, row, column)
            {
                return Some(Cell::new(row, column, Some(value)));
            }
        }
        None
    }

    /// Rotate 90 degrees clockwise
    ///
    /// Dimensions swap and the value at `(row, column)` moves to
    /// `(column, rows - 1 - row)`. Four rotations restore the grid.
    pub fn rotate(&mut self) {
        let (rows, columns) = self.dimensions();
        let mut rotated: Array2<Option<T>> = Array2::default((columns, rows));

        for ((row, column), slot) in self.cells.indexed_iter_mut() {
            if let Some(dst) = rotated.get_mut((column, rows - 1 - row)) {
                *dst = slot.take();
            }
        }

        self.cells = rotated;
        debug!("rotated grid from {rows}x{columns} to {columns}x{rows}");
    }

    /// Consume the grid into owned row-major snapshots
    pub fn into_cells(mut self) -> Vec<Cell<T>> {
        self.cells
            .indexed_iter_mut()
            .map(|((row, column), slot)| Cell::new(row, column, slot.take()))
            .collect()
    }

    /// Overwrite a slot that is known to be in bounds
    pub(crate) fn place(&mut self, row: usize, column: usize, value: Option<T>) {
        if let Some(slot) = self.cells.get_mut((row, column)) {
            *slot = value;
        }
    }

    fn slot_mut(&mut self, row: usize, column: usize) -> Result<&mut Option<T>> {
        let dimensions = self.dimensions();
        self.cells
            .get_mut((row, column))
            .ok_or_else(|| out_of_bounds(row, column, dimensions))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.outer_iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (column, slot) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                match slot {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_str(EMPTY_CELL_SYMBOL)?,
                }
            }
        }
        Ok(())
    }
}
