//! Whole-grid algorithms built on the public grid contract

/// Predicate-masked grid copies
pub mod filter;
/// Horizontal and vertical mirroring
pub mod transformer;

pub use filter::Filter;
pub use transformer::Transformer;
