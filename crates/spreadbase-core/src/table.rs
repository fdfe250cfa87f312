//! Table type
//!
//! A table is a named, possibly jagged, grid of cells. Row indexes may be
//! negative, counting from the end (`-1` is the last row). Cell access is
//! bounded by the addressed row; column reads are not (short rows yield
//! [`CellValue::Null`]).

use std::fmt;
use std::ops::RangeInclusive;

use crate::cell::{Cell, CellValue};
use crate::column::ColumnIdentifier;
use crate::error::{Error, Result};
use crate::render::pretty_print_rows;

/// A named grid of cells
///
/// Tables only come from the checked constructors, so there is no nameless one:
///
/// ```compile_fail
/// let table = spreadbase_core::Table::default();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name (never empty)
    name: String,
    /// Column width style name per column; `None` means no explicit width
    column_width_styles: Vec<Option<String>>,
    /// Rows of cells
    data: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a new empty table with the given name
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingTableName);
        }

        Ok(Self {
            name,
            column_width_styles: Vec::new(),
            data: Vec::new(),
        })
    }

    /// Create a table with initial data; every raw value is wrapped in a [`Cell`]
    pub fn with_data<S, R, V>(name: S, rows: R) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut table = Self::new(name)?;
        table.data = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::new).collect())
            .collect();
        Ok(table)
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the table
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingTableName);
        }
        self.name = name;
        Ok(())
    }

    /// Column width style name per column, left to right
    pub fn column_width_styles(&self) -> &[Option<String>] {
        &self.column_width_styles
    }

    /// Replace the per-column width style names
    pub fn set_column_width_styles(&mut self, styles: Vec<Option<String>>) {
        self.column_width_styles = styles;
    }

    /// All rows, as cells
    pub fn data(&self) -> &[Vec<Cell>] {
        &self.data
    }

    /// Replace the whole grid
    pub fn set_data(&mut self, data: Vec<Vec<Cell>>) {
        self.data = data;
    }

    /// All rows, unwrapped to their values
    pub fn values(&self) -> Vec<Vec<CellValue>> {
        self.data.iter().map(|row| unwrap_row(row)).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    // === Cell Access ===

    /// Get a cell value
    pub fn get<C: Into<ColumnIdentifier>>(&self, column: C, row: isize) -> Result<&CellValue> {
        let row_index = self.resolve_row_index(row, false)?;
        let row = &self.data[row_index];
        let column_index = Self::check_column_index(row, column.into())?;
        Ok(row[column_index].value())
    }

    /// Replace a cell value
    pub fn set<C, V>(&mut self, column: C, row: isize, value: V) -> Result<()>
    where
        C: Into<ColumnIdentifier>,
        V: Into<CellValue>,
    {
        let row_index = self.resolve_row_index(row, false)?;
        let row = &mut self.data[row_index];
        let column_index = Self::check_column_index(row, column.into())?;
        row[column_index] = Cell::new(value);
        Ok(())
    }

    /// Get a column's values over an inclusive range of rows
    ///
    /// Every addressed row must be long enough to hold the column.
    pub fn get_range<C: Into<ColumnIdentifier>>(
        &self,
        column: C,
        rows: RangeInclusive<isize>,
    ) -> Result<Vec<&CellValue>> {
        let column = column.into();
        let (start, end) = self.resolve_row_range(rows)?;

        self.data[start..end]
            .iter()
            .map(|row| {
                let index = Self::check_column_index(row, column.clone())?;
                Ok(row[index].value())
            })
            .collect()
    }

    // === Rows ===

    /// Get a single row, as cells
    pub fn row(&self, index: isize) -> Result<&[Cell]> {
        let index = self.resolve_row_index(index, false)?;
        Ok(&self.data[index])
    }

    /// Get a single row, unwrapped to its values
    pub fn row_values(&self, index: isize) -> Result<Vec<CellValue>> {
        self.row(index).map(unwrap_row)
    }

    /// Get an inclusive range of rows
    pub fn rows(&self, range: RangeInclusive<isize>) -> Result<&[Vec<Cell>]> {
        let (start, end) = self.resolve_row_range(range)?;
        Ok(&self.data[start..end])
    }

    /// Insert a row; `index` may be equal to the number of rows (append)
    ///
    /// The row width isn't checked, so tables may become jagged.
    pub fn insert_row<I, V>(&mut self, index: isize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let index = self.resolve_row_index(index, true)?;
        self.data
            .insert(index, values.into_iter().map(Cell::new).collect());
        Ok(())
    }

    /// Append a row at the end of the table
    pub fn append_row<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.data.push(values.into_iter().map(Cell::new).collect());
    }

    /// Delete a row, returning it. Column width styles are untouched.
    pub fn delete_row(&mut self, index: isize) -> Result<Vec<Cell>> {
        let index = self.resolve_row_index(index, false)?;
        Ok(self.data.remove(index))
    }

    /// Delete an inclusive range of rows, returning them
    pub fn delete_rows(&mut self, range: RangeInclusive<isize>) -> Result<Vec<Vec<Cell>>> {
        let (start, end) = self.resolve_row_range(range)?;
        Ok(self.data.drain(start..end).collect())
    }

    // === Columns ===

    /// Get a column; rows shorter than the column contribute `Null`
    pub fn column<C: Into<ColumnIdentifier>>(&self, column: C) -> Result<Vec<CellValue>> {
        let index = column.into().resolve()?;
        Ok(self
            .data
            .iter()
            .map(|row| row.get(index).map(|cell| cell.value().clone()).unwrap_or_default())
            .collect())
    }

    /// Get an inclusive range of columns
    pub fn columns<C, D>(&self, first: C, last: D) -> Result<Vec<Vec<CellValue>>>
    where
        C: Into<ColumnIdentifier>,
        D: Into<ColumnIdentifier>,
    {
        let first = first.into().resolve()?;
        let last = last.into().resolve()?;
        (first..=last).map(|index| self.column(index)).collect()
    }

    /// Delete a column, returning its values.
    ///
    /// The matching column width style is removed too. Deleting past the end
    /// of a row yields `Null` for that row.
    pub fn delete_column<C: Into<ColumnIdentifier>>(&mut self, column: C) -> Result<Vec<CellValue>> {
        let index = column.into().resolve()?;
        Ok(self.remove_column_at(index))
    }

    /// Delete an inclusive range of columns, returning them in ascending order.
    ///
    /// Columns are removed one by one from the highest index down, so each
    /// index (and its width style) refers to the layout before the call.
    pub fn delete_columns<C, D>(&mut self, first: C, last: D) -> Result<Vec<Vec<CellValue>>>
    where
        C: Into<ColumnIdentifier>,
        D: Into<ColumnIdentifier>,
    {
        let first = first.into().resolve()?;
        let last = last.into().resolve()?;

        let mut deleted: Vec<_> = (first..=last)
            .rev()
            .map(|index| self.remove_column_at(index))
            .collect();
        deleted.reverse();
        Ok(deleted)
    }

    /// Insert a column.
    ///
    /// On a non-empty table the column must have one value per row. Rows
    /// shorter than the insertion point are padded with `Null` first. A `None`
    /// width style is inserted at the same index.
    pub fn insert_column<C, I, V>(&mut self, column: C, values: I) -> Result<()>
    where
        C: Into<ColumnIdentifier>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let cells: Vec<Cell> = values.into_iter().map(Cell::new).collect();

        if !self.data.is_empty() && cells.len() != self.data.len() {
            return Err(Error::ColumnSizeMismatch {
                expected: self.data.len(),
                actual: cells.len(),
            });
        }

        let index = column.into().resolve()?;

        if self.column_width_styles.len() < index {
            self.column_width_styles.resize(index, None);
        }
        self.column_width_styles.insert(index, None);

        if self.data.is_empty() {
            self.data = vec![Vec::new(); cells.len()];
        }

        for (row, cell) in self.data.iter_mut().zip(cells) {
            if row.len() < index {
                row.resize(index, Cell::null());
            }
            row.insert(index, cell);
        }

        Ok(())
    }

    /// Append a column after the first row's last cell
    pub fn append_column<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let index = self.data.first().map_or(0, Vec::len);
        self.insert_column(index, values)
    }

    // === Rendering ===

    /// Render the grid as a fixed-width text table
    pub fn to_pretty_string(&self, with_headers: bool) -> String {
        pretty_print_rows(&self.data, "", with_headers)
    }

    // === Helpers ===

    /// Resolve a (possibly negative) row index.
    ///
    /// With `allow_append`, the index may point one past the last row, and
    /// negative indexes are rejected.
    fn resolve_row_index(&self, index: isize, allow_append: bool) -> Result<usize> {
        let len = self.data.len() as isize;
        let max = if allow_append { len } else { len - 1 };
        let resolved = if index < 0 && !allow_append {
            len + index
        } else {
            index
        };

        if resolved < 0 || resolved > max {
            return Err(Error::InvalidRowIndex { index, max });
        }

        Ok(resolved as usize)
    }

    /// Resolve an inclusive row range to a half-open one
    fn resolve_row_range(&self, range: RangeInclusive<isize>) -> Result<(usize, usize)> {
        let start = self.resolve_row_index(*range.start(), false)?;
        let end = self.resolve_row_index(*range.end(), false)?;
        if start > end {
            return Ok((start, start));
        }
        Ok((start, end + 1))
    }

    fn check_column_index(row: &[Cell], column: ColumnIdentifier) -> Result<usize> {
        let index = column.resolve()?;
        if index >= row.len() {
            return Err(Error::ColumnOutOfRange {
                index,
                max: row.len() as isize - 1,
            });
        }
        Ok(index)
    }

    fn remove_column_at(&mut self, index: usize) -> Vec<CellValue> {
        if index < self.column_width_styles.len() {
            self.column_width_styles.remove(index);
        }

        self.data
            .iter_mut()
            .map(|row| {
                if index < row.len() {
                    row.remove(index).into_value()
                } else {
                    CellValue::Null
                }
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string(false))
    }
}

fn unwrap_row(row: &[Cell]) -> Vec<CellValue> {
    row.iter().map(|cell| cell.value().clone()).collect()
}
