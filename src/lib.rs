//! Bounds-checked two-dimensional grid containers
//!
//! A fixed-shape [`Grid`] of optional values with row-major traversal,
//! Moore-neighborhood lookup, masked filtering, rotation and mirroring,
//! structured and delimited-text import/export, and numeric statistics.
//! [`HexagonalGrid`] extends the same contract with two half-cells per
//! location to approximate a hexagonal tiling on rectangular storage.

#![forbid(unsafe_code)]

/// Filtering and axis transforms
pub mod algorithm;
/// Numeric aggregation over grid values
pub mod analysis;
/// Import/export, configuration and error handling
pub mod io;
/// Grid containers, cells, traversal and neighborhoods
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Cell, Grid, HexagonalGrid};
