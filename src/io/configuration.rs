//! Crate constants and delimited-text format configuration

use crate::io::error::{Result, invalid_parameter};

/// Number of half-cells per location in a split-cell grid
pub const HEX_SUBCELLS: usize = 2;

// Safety limit to prevent excessive memory allocation from untrusted input
/// Maximum allowed grid dimension for imported data
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default separator between fields of one row
pub const DEFAULT_FIELD_DELIMITER: &str = ",";
/// Default separator between rows
pub const DEFAULT_LINE_DELIMITER: &str = "\n";
/// Tab separator for TSV output
pub const TAB_DELIMITER: &str = "\t";

/// Placeholder printed for empty slots in text rendering
pub const EMPTY_CELL_SYMBOL: &str = ".";

/// Delimiters used by delimited-text export and import
///
/// No quoting is performed; values containing either delimiter are rejected
/// on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Separator between fields of one row
    pub field_delimiter: String,
    /// Separator between rows
    pub line_delimiter: String,
}

impl TextFormat {
    /// Create a format from explicit delimiters
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidParameter`] if either delimiter is
    /// empty or one contains the other
    pub fn new(field_delimiter: &str, line_delimiter: &str) -> Result<Self> {
        let format = Self {
            field_delimiter: field_delimiter.to_string(),
            line_delimiter: line_delimiter.to_string(),
        };
        format.validate()?;
        Ok(format)
    }

    /// Comma-separated fields, newline-separated rows
    pub fn csv() -> Self {
        Self {
            field_delimiter: DEFAULT_FIELD_DELIMITER.to_string(),
            line_delimiter: DEFAULT_LINE_DELIMITER.to_string(),
        }
    }

    /// Tab-separated fields, newline-separated rows
    pub fn tsv() -> Self {
        Self {
            field_delimiter: TAB_DELIMITER.to_string(),
            line_delimiter: DEFAULT_LINE_DELIMITER.to_string(),
        }
    }

    /// Check that the delimiters can be told apart when splitting
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidParameter`] naming the offending delimiter
    pub fn validate(&self) -> Result<()> {
        if self.field_delimiter.is_empty() {
            return Err(invalid_parameter(
                "field_delimiter",
                &"",
                &"delimiter must not be empty",
            ));
        }
        if self.line_delimiter.is_empty() {
            return Err(invalid_parameter(
                "line_delimiter",
                &"",
                &"delimiter must not be empty",
            ));
        }
        if self.line_delimiter.contains(self.field_delimiter.as_str())
            || self.field_delimiter.contains(self.line_delimiter.as_str())
        {
            return Err(invalid_parameter(
                "field_delimiter",
                &self.field_delimiter.escape_debug(),
                &"field and line delimiters must not overlap",
            ));
        }
        Ok(())
    }

    /// Whether a rendered value would be split apart by these delimiters
    pub fn collides_with(&self, text: &str) -> bool {
        text.contains(self.field_delimiter.as_str()) || text.contains(self.line_delimiter.as_str())
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::csv()
    }
}
