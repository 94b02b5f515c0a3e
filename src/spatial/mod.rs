//! Spatial data structures and grid access
//!
//! This module contains spatial-related functionality including:
//! - The fixed-shape grid container and its cell snapshots
//! - Row-major traversal and neighborhood lookup
//! - The split-cell grid used for hexagonal layouts

/// Immutable cell snapshots
pub mod cell;
/// Fixed-shape grid container
pub mod grid;
/// Split-cell grid approximating hexagonal tilings
pub mod hexagonal;
/// Row-major grid cursor
pub mod iterator;
/// Moore-neighborhood lookup
pub mod neighborhood;

pub use cell::Cell;
pub use grid::Grid;
pub use hexagonal::HexagonalGrid;
pub use iterator::GridIterator;
pub use neighborhood::Neighborhood;
