//! Immutable cell snapshots produced by traversal and lookup

/// A `(row, column, value)` snapshot of one grid slot
///
/// Traversal yields `Cell<&T>` borrowing from the grid; [`Cell::cloned`]
/// detaches it. An owned cell never aliases the grid's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell<T> {
    /// Row of the slot
    pub row: usize,
    /// Column of the slot
    pub column: usize,
    /// Slot contents, `None` for an empty slot
    pub value: Option<T>,
}

impl<T> Cell<T> {
    /// Create a snapshot
    pub const fn new(row: usize, column: usize, value: Option<T>) -> Self {
        Self { row, column, value }
    }

    /// Coordinates as a `[row, column]` pair
    pub const fn position(&self) -> [usize; 2] {
        [self.row, self.column]
    }

    /// Test whether the slot held no value
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Clone> Cell<&T> {
    /// Detach the snapshot from the grid by cloning its value
    pub fn cloned(&self) -> Cell<T> {
        Cell {
            row: self.row,
            column: self.column,
            value: self.value.cloned(),
        }
    }
}
