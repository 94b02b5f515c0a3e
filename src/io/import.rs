//! Structured and delimited-text import with rectangularity validation
//!
//! Every importer checks that all rows have the same length as the first one
//! and that the shape stays within [`MAX_GRID_DIMENSION`] before allocating
//! the grid.

use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::io::configuration::{MAX_GRID_DIMENSION, TextFormat};
use crate::io::error::{GridError, Result, WithOperation, validation_error};
use crate::io::export::CellRecord;
use crate::spatial::grid::Grid;

/// Builds grids from exported data
#[derive(Debug, Clone, Copy, Default)]
pub struct GridImporter;

impl GridImporter {
    /// Rebuild a grid from row groups of records
    ///
    /// Dimensions are `(groups, length of the first group)`. Each record is
    /// placed at its own coordinates; a `null` record empties its slot.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Validation`] for non-rectangular input and
    /// [`GridError::IndexOutOfBounds`] for a record outside the inferred shape
    pub fn from_records<T>(groups: Vec<Vec<CellRecord<T>>>) -> Result<Grid<T>> {
        let (rows, columns) = validate_shape(&groups)?;
        let mut grid = Grid::new(rows, columns);

        for record in groups.into_iter().flatten() {
            match record.data {
                Some(value) => grid.add_item(record.row, record.column, value)?,
                None => {
                    grid.remove_item(record.row, record.column)?;
                }
            }
        }

        debug!("imported {rows}x{columns} grid from records");
        Ok(grid)
    }

    /// Rebuild a grid from the JSON produced by `GridExporter::to_json`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Serialization`] for malformed JSON, otherwise fails
    /// like [`GridImporter::from_records`]
    pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<Grid<T>> {
        let groups: Vec<Vec<CellRecord<T>>> = serde_json::from_str(json)?;
        Self::from_records(groups)
    }

    /// Parse delimited text into a grid
    ///
    /// The column count comes from the first row. Empty fields become empty
    /// slots. Fields are parsed verbatim, without trimming.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for an unusable format,
    /// [`GridError::Validation`] when a row's field count differs from the
    /// first row's, and [`GridError::Parse`] for a field `T` cannot parse
    pub fn from_delimited<T>(text: &str, format: &TextFormat) -> Result<Grid<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        format.validate()?;

        let rows: Vec<Vec<&str>> = text
            .split(format.line_delimiter.as_str())
            .map(|line| line.split(format.field_delimiter.as_str()).collect())
            .collect();
        let (row_count, column_count) = validate_shape(&rows)?;

        let mut grid = Grid::new(row_count, column_count);
        for (row, fields) in rows.iter().enumerate() {
            for (column, field) in fields.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                let value = field.parse::<T>().map_err(|error| GridError::Parse {
                    row,
                    column,
                    field: (*field).to_string(),
                    reason: error.to_string(),
                })?;
                grid.add_item(row, column, value)?;
            }
        }

        debug!("imported {row_count}x{column_count} grid from delimited text");
        Ok(grid)
    }

    /// Parse comma-separated text with newline row separators
    ///
    /// # Errors
    ///
    /// Fails like [`GridImporter::from_delimited`]
    pub fn from_csv<T>(text: &str) -> Result<Grid<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        Self::from_delimited(text, &TextFormat::csv())
    }

    /// Read delimited text written by `GridExporter::write_delimited`
    ///
    /// One trailing line delimiter is dropped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] when reading fails, otherwise fails like
    /// [`GridImporter::from_delimited`]
    pub fn read_delimited<T, R>(mut reader: R, format: &TextFormat) -> Result<Grid<T>>
    where
        T: FromStr,
        T::Err: Display,
        R: Read,
    {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_operation("reading delimited text")?;

        let body = text
            .strip_suffix(format.line_delimiter.as_str())
            .unwrap_or(text.as_str());
        Self::from_delimited(body, format)
    }
}

/// Check that every row matches the first row's length
///
/// Returns `(rows, columns)` of the rectangular input.
///
/// # Errors
///
/// Returns [`GridError::Validation`] naming the first mismatching row, or when
/// either dimension exceeds [`MAX_GRID_DIMENSION`]
pub fn validate_shape<R>(rows: &[Vec<R>]) -> Result<(usize, usize)> {
    let row_count = rows.len();
    let column_count = rows.first().map_or(0, Vec::len);

    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != column_count)
    {
        warn!("rejecting non-rectangular import at row {index}");
        return Err(validation_error(&format!(
            "row {index} has {} columns, expected {column_count}",
            row.len()
        )));
    }

    if row_count > MAX_GRID_DIMENSION || column_count > MAX_GRID_DIMENSION {
        warn!("rejecting oversized import of {row_count}x{column_count}");
        return Err(validation_error(&format!(
            "{row_count}x{column_count} exceeds the maximum dimension of {MAX_GRID_DIMENSION}"
        )));
    }

    Ok((row_count, column_count))
}
