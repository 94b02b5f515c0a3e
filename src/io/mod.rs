//! Input/output operations, configuration and error handling

/// Crate constants and delimited-text formats
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Structured and delimited-text export
pub mod export;
/// Structured and delimited-text import
pub mod import;

pub use configuration::TextFormat;
pub use export::{CellRecord, GridExporter};
pub use import::GridImporter;
