//! Error types for grid access, validation and serialization

use std::fmt;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A coordinate fell outside the current grid shape
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Requested sub-slot, for split-cell grids
        index: Option<usize>,
        /// Grid dimensions (rows, columns) at the time of the request
        dimensions: (usize, usize),
    },

    /// Input data doesn't describe a valid grid
    ///
    /// Raised before any allocation when:
    /// - Imported rows disagree in length
    /// - A value's text collides with a delimiter
    /// - Imported dimensions exceed the configured maximum
    Validation {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// A delimited-text field could not be parsed into the cell type
    Parse {
        /// Row of the offending field
        row: usize,
        /// Column of the offending field
        column: usize,
        /// Raw field text
        field: String,
        /// Parser message
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Structured (JSON) encoding or decoding failed
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Reading or writing delimited text failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds {
                row,
                column,
                index: Some(index),
                dimensions,
            } => write!(
                f,
                "Index ({row}, {column}, {index}) is out of bounds for {}x{} split-cell grid",
                dimensions.0, dimensions.1
            ),
            Self::IndexOutOfBounds {
                row,
                column,
                index: None,
                dimensions,
            } => write!(
                f,
                "Index ({row}, {column}) is out of bounds for {}x{} grid",
                dimensions.0, dimensions.1
            ),
            Self::Validation { reason } => write!(f, "Invalid grid data: {reason}"),
            Self::Parse {
                row,
                column,
                field,
                reason,
            } => write!(
                f,
                "Failed to parse field '{field}' at ({row}, {column}): {reason}"
            ),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}"),
            Self::Serialization { source } => write!(f, "Serialization error: {source}"),
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an out-of-bounds error for a plain grid coordinate
pub const fn out_of_bounds(row: usize, column: usize, dimensions: (usize, usize)) -> GridError {
    GridError::IndexOutOfBounds {
        row,
        column,
        index: None,
        dimensions,
    }
}

/// Create a validation error
pub fn validation_error(reason: &impl ToString) -> GridError {
    GridError::Validation {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach an operation name to I/O failures
pub trait WithOperation<T> {
    /// Wrap an I/O error with the operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`GridError::Io`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::Io { operation, source })
    }
}
