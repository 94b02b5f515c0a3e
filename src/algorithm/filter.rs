//! Predicate-masked copies of a grid

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

use crate::spatial::grid::Grid;

/// Masked filtering over a borrowed grid
///
/// Filtering never compacts: survivors keep their exact coordinates and
/// every other slot of the result is empty.
#[derive(Debug, Clone, Copy)]
pub struct Filter<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> Filter<'a, T> {
    /// Wrap a grid for filtering
    pub const fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Row-major survivor mask, one bit per slot
    ///
    /// Empty slots are never passed to the predicate and are always unset.
    pub fn mask<P>(&self, mut predicate: P) -> BitVec
    where
        P: FnMut(&T, usize, usize) -> bool,
    {
        let mut mask = BitVec::with_capacity(self.grid.slot_count());
        self.grid.for_each(|value, row, column| {
            mask.push(value.is_some_and(|item| predicate(item, row, column)));
        });
        mask
    }

    /// Copy of the grid keeping only values whose mask bit is set
    ///
    /// Bits beyond the end of `mask` count as unset.
    pub fn apply_mask(&self, mask: &BitSlice) -> Grid<T>
    where
        T: Clone,
    {
        let columns = self.grid.columns();
        self.grid.map(|value, row, column| {
            let keep = mask.get(row * columns + column).as_deref() == Some(&true);
            value.filter(|_| keep).cloned()
        })
    }

    /// Same-shape copy keeping values where the predicate holds
    pub fn filter<P>(&self, predicate: P) -> Grid<T>
    where
        T: Clone,
        P: FnMut(&T, usize, usize) -> bool,
    {
        let mask = self.mask(predicate);
        self.apply_mask(&mask)
    }

    /// Number of values satisfying the predicate
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T, usize, usize) -> bool,
    {
        self.mask(predicate).count_ones()
    }
}
