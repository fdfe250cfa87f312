//! # spreadbase-core
//!
//! Core data structures for the spreadbase spreadsheet library.
//!
//! This crate provides the in-memory model the ODS codec reads and writes:
//! - [`CellValue`] and [`Cell`] - Typed cell values
//! - [`ColumnIdentifier`] - Column addressing by index or letters (`A`..`AMJ`)
//! - [`Table`] - A named, possibly jagged grid of cells
//! - [`Document`] - Tables plus the column width styles they use
//!
//! ## Example
//!
//! ```rust
//! use spreadbase_core::{CellValue, Document, Table};
//!
//! let mut table = Table::new("Sheet1").unwrap();
//! table.append_row(["name", "qty"]);
//! table.append_row(vec![CellValue::from("apples"), CellValue::from(3)]);
//!
//! assert_eq!(table.get("B", -1).unwrap(), &CellValue::Integer(3));
//!
//! let mut document = Document::new();
//! document.add_table(table);
//! ```

pub mod cell;
pub mod column;
pub mod document;
pub mod error;
pub mod render;
pub mod table;

// Re-exports for convenience
pub use cell::{Cell, CellValue};
pub use column::{column_to_letters, letters_to_column, ColumnIdentifier};
pub use document::Document;
pub use error::{Error, Result};
pub use table::Table;

// Value types used by cells
pub use chrono::{NaiveDate, NaiveDateTime};
pub use rust_decimal::Decimal;

/// Maximum number of columns in a table (`A` to `AMJ`)
pub const MAX_COLUMNS: usize = 1024;
