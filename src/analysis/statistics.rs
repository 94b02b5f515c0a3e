//! Numeric aggregation over grid values
//!
//! Aggregates walk the full grid. Empty slots contribute nothing to sums and
//! are skipped by comparisons, but every slot counts towards the average's
//! denominator. Degenerate grids are not errors: `average` turns NaN and
//! `max`/`min` return their infinite starting values.

use std::cmp::Ordering;

use num_traits::ToPrimitive;

use crate::spatial::grid::Grid;

/// Aggregates over a borrowed grid
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> Statistics<'a, T> {
    /// Wrap a grid for aggregation
    pub const fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Largest value under a caller-supplied ordering, `None` without values
    pub fn max_by<F>(&self, mut compare: F) -> Option<&'a T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.grid
            .iter()
            .filter_map(|cell| cell.value)
            .max_by(|a, b| compare(*a, *b))
    }

    /// Smallest value under a caller-supplied ordering, `None` without values
    pub fn min_by<F>(&self, mut compare: F) -> Option<&'a T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.grid
            .iter()
            .filter_map(|cell| cell.value)
            .min_by(|a, b| compare(*a, *b))
    }
}

impl<T: ToPrimitive> Statistics<'_, T> {
    /// Sum of all values as `f64`
    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        self.grid.for_each(|value, _, _| {
            if let Some(number) = value.and_then(ToPrimitive::to_f64) {
                total += number;
            }
        });
        total
    }

    /// Sum divided by `rows * columns`
    ///
    /// Divides by the slot count rather than the number of occupied slots;
    /// a zero-size grid yields NaN.
    pub fn average(&self) -> f64 {
        self.sum() / self.grid.slot_count() as f64
    }

    /// Largest value, `-inf` when the grid holds none
    pub fn max(&self) -> f64 {
        let mut max = f64::NEG_INFINITY;
        self.grid.for_each(|value, _, _| {
            if let Some(number) = value.and_then(ToPrimitive::to_f64)
                && number > max
            {
                max = number;
            }
        });
        max
    }

    /// Smallest value, `+inf` when the grid holds none
    pub fn min(&self) -> f64 {
        let mut min = f64::INFINITY;
        self.grid.for_each(|value, _, _| {
            if let Some(number) = value.and_then(ToPrimitive::to_f64)
                && number < min
            {
                min = number;
            }
        });
        min
    }
}
