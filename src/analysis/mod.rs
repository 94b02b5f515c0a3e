//! Numeric analysis of grid contents

/// Sum, average and extremes over numeric grids
pub mod statistics;

pub use statistics::Statistics;
