//! # spreadbase
//!
//! A Rust library for reading, writing, and manipulating ODS spreadsheets.
//!
//! A [`Document`] holds named [`Table`]s of typed cells. Documents are read
//! from and written to OpenDocument Spreadsheet archives through the
//! [`DocumentExt`] extension trait.
//!
//! ## Features
//!
//! - Typed cell values: booleans, integers, floats, exact decimals, text,
//!   dates and date-times
//! - Row and column operations on jagged tables, with spreadsheet letter
//!   addressing (`A`..`AMJ`)
//! - ODS encoding and decoding, including run-length compressed rows and cells
//!
//! ## Example
//!
//! ```rust
//! use spreadbase::prelude::*;
//!
//! let mut document = Document::new();
//! let mut table = Table::new("Sheet1").unwrap();
//! table.append_row(vec![CellValue::from("Total"), CellValue::from(42)]);
//! document.add_table(table);
//!
//! let bytes = document.to_archive(&OdsOptions::default()).unwrap();
//! let decoded = Document::from_archive(&bytes, &OdsOptions::default()).unwrap();
//!
//! assert_eq!(decoded.tables[0].get("B", 0).unwrap(), &CellValue::Integer(42));
//!
//! // Save to file
//! // document.set_path(Some("output.ods"));
//! // document.save(&OdsOptions::default()).unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use spreadbase_core::{
    column_to_letters,
    letters_to_column,
    // Cell types
    Cell,
    CellValue,
    ColumnIdentifier,
    Decimal,
    // Main types
    Document,
    // Error types
    Error,
    NaiveDate,
    NaiveDateTime,
    Result,
    Table,
    // Constants
    MAX_COLUMNS,
};

// Re-export I/O types
pub use spreadbase_ods::{
    decode_archive, decode_content_xml, encode_archive, encode_content_xml, OdsError,
    OdsOptions, OdsReader, OdsResult, OdsWriter,
};

use std::path::Path;

/// Extension trait for Document to add file I/O
pub trait DocumentExt: Sized {
    /// Open a document from a file
    ///
    /// When nothing exists at `path` yet, an empty document bound to `path`
    /// is returned, so that a later [`save`](DocumentExt::save) creates it.
    fn open<P: AsRef<Path>>(path: P, options: &OdsOptions) -> OdsResult<Self>;

    /// Decode a document from archive bytes
    fn from_archive(bytes: &[u8], options: &OdsOptions) -> OdsResult<Self>;

    /// Encode the document to archive bytes
    fn to_archive(&self, options: &OdsOptions) -> OdsResult<Vec<u8>>;

    /// Save the document to the path it is bound to
    fn save(&self, options: &OdsOptions) -> OdsResult<()>;
}

impl DocumentExt for Document {
    fn open<P: AsRef<Path>>(path: P, options: &OdsOptions) -> OdsResult<Document> {
        let path = path.as_ref();

        if path.exists() {
            OdsReader::read_file(path, options)
        } else {
            Ok(Document::with_path(path))
        }
    }

    fn from_archive(bytes: &[u8], options: &OdsOptions) -> OdsResult<Document> {
        decode_archive(bytes, options)
    }

    fn to_archive(&self, options: &OdsOptions) -> OdsResult<Vec<u8>> {
        encode_archive(self, options)
    }

    fn save(&self, options: &OdsOptions) -> OdsResult<()> {
        let path = self.check_saveable()?;
        OdsWriter::write_file(self, path, options)
    }
}
