//! Document type - the unit read from and written to an archive

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::render::pretty_print_rows;
use crate::table::Table;

/// A spreadsheet document
///
/// A document owns its tables, plus the column width styles they refer to by
/// name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Tables, in order
    pub tables: Vec<Table>,
    /// Column width styles (style name => width, e.g. `"2.5cm"`)
    pub column_width_styles: IndexMap<String, String>,
    /// Where the document is saved to
    path: Option<PathBuf>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document bound to a destination path
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path<P: Into<PathBuf>>(&mut self, path: Option<P>) {
        self.path = path.map(Into::into);
    }

    /// Get the number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Add a table at the end, returning its index
    pub fn add_table(&mut self, table: Table) -> usize {
        self.tables.push(table);
        self.tables.len() - 1
    }

    /// Get a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name() == name)
    }

    /// Get a mutable table by name
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|table| table.name() == name)
    }

    /// Check that the document can be saved, returning the destination
    pub fn check_saveable(&self) -> Result<&Path> {
        self.check_has_tables()?;
        self.path().ok_or(Error::DestinationNotSpecified)
    }

    /// Check that the document can be encoded
    pub fn check_has_tables(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(Error::NoTablesPresent);
        }
        Ok(())
    }

    /// Render every table as a fixed-width grid, preceded by its name
    pub fn to_pretty_string(&self, with_headers: bool) -> String {
        self.tables.iter().fold(String::new(), |mut output, table| {
            output.push_str(table.name());
            output.push_str(":\n\n");
            output.push_str(&pretty_print_rows(table.data(), "  ", with_headers));
            output.push('\n');
            output
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string(false))
    }
}
