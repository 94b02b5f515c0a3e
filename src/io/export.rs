//! Structured and delimited-text export
//!
//! Structured export emits one `{row, column, data}` record per slot, grouped
//! by row, empty slots included. Delimited text joins rendered values with
//! the configured delimiters and refuses values that would corrupt the split.

use std::fmt::Display;
use std::io::Write;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::io::configuration::TextFormat;
use crate::io::error::{Result, WithOperation, validation_error};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

/// One slot in the structured export format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord<T> {
    /// Row of the slot
    pub row: usize,
    /// Column of the slot
    pub column: usize,
    /// Slot contents, `null` when empty
    pub data: Option<T>,
}

impl<T> From<Cell<T>> for CellRecord<T> {
    fn from(cell: Cell<T>) -> Self {
        Self {
            row: cell.row,
            column: cell.column,
            data: cell.value,
        }
    }
}

impl<T> From<CellRecord<T>> for Cell<T> {
    fn from(record: CellRecord<T>) -> Self {
        Self::new(record.row, record.column, record.data)
    }
}

/// Serializes a borrowed grid
#[derive(Debug, Clone, Copy)]
pub struct GridExporter<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> GridExporter<'a, T> {
    /// Wrap a grid for export
    pub const fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Owned records, one group per row in row-major order
    pub fn to_records(&self) -> Vec<Vec<CellRecord<T>>>
    where
        T: Clone,
    {
        self.borrowed_records()
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|record| CellRecord {
                        row: record.row,
                        column: record.column,
                        data: record.data.cloned(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Records encoded as a JSON array of row arrays
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::Serialization`] if a value fails to serialize
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(&self.borrowed_records())?)
    }

    /// Indented variant of [`GridExporter::to_json`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::Serialization`] if a value fails to serialize
    pub fn to_json_pretty(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.borrowed_records())?)
    }

    /// Render the grid as delimited text
    ///
    /// Empty slots become empty fields. No trailing line delimiter is added.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidParameter`] for an unusable format and
    /// [`crate::GridError::Validation`] for a grid with no slots, a rendered
    /// value containing a delimiter, or a value rendering as an empty field
    pub fn to_delimited(&self, format: &TextFormat) -> Result<String>
    where
        T: Display,
    {
        format.validate()?;

        let (rows, columns) = self.grid.dimensions();
        if rows == 0 || columns == 0 {
            warn!("refusing to export {rows}x{columns} grid as delimited text");
            return Err(validation_error(&format!(
                "{rows}x{columns} grid has no slots to write as delimited text"
            )));
        }

        let mut lines = Vec::with_capacity(rows);
        let mut fields = Vec::with_capacity(columns);
        for cell in self.grid {
            let field = match cell.value {
                Some(value) => render_field(value, cell.row, cell.column, format)?,
                None => String::new(),
            };
            fields.push(field);

            if fields.len() == columns {
                lines.push(fields.join(format.field_delimiter.as_str()));
                fields.clear();
            }
        }

        Ok(lines.join(format.line_delimiter.as_str()))
    }

    /// Comma-separated rendering with newline row separators
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::Validation`] if a rendered value contains a
    /// comma or newline
    pub fn to_csv(&self) -> Result<String>
    where
        T: Display,
    {
        self.to_delimited(&TextFormat::csv())
    }

    /// Write delimited text followed by one line delimiter
    ///
    /// # Errors
    ///
    /// Fails like [`GridExporter::to_delimited`], or with
    /// [`crate::GridError::Io`] when the writer fails
    pub fn write_delimited<W: Write>(&self, mut writer: W, format: &TextFormat) -> Result<()>
    where
        T: Display,
    {
        let text = self.to_delimited(format)?;
        writer
            .write_all(text.as_bytes())
            .with_operation("writing delimited text")?;
        writer
            .write_all(format.line_delimiter.as_bytes())
            .with_operation("writing delimited text")?;
        writer.flush().with_operation("flushing delimited text")
    }

    fn borrowed_records(&self) -> Vec<Vec<CellRecord<&'a T>>> {
        let grid = self.grid;
        let mut groups: Vec<Vec<CellRecord<&'a T>>> = (0..grid.rows())
            .map(|_| Vec::with_capacity(grid.columns()))
            .collect();

        for cell in grid {
            if let Some(group) = groups.get_mut(cell.row) {
                group.push(CellRecord::from(cell));
            }
        }
        groups
    }
}

/// Render one occupied slot, refusing text that would not read back as the same slot
fn render_field<T: Display>(
    value: &T,
    row: usize,
    column: usize,
    format: &TextFormat,
) -> Result<String> {
    let field = value.to_string();
    if field.is_empty() {
        warn!("refusing to export value at ({row}, {column}) rendering as an empty field");
        return Err(validation_error(&format!(
            "value at ({row}, {column}) renders as an empty field and would import as empty"
        )));
    }
    if format.collides_with(&field) {
        warn!("refusing to export value at ({row}, {column}) containing a delimiter");
        return Err(validation_error(&format!(
            "value '{}' at ({row}, {column}) contains a delimiter",
            field.escape_debug()
        )));
    }
    Ok(field)
}
