//! ODS writer

mod content;

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use crate::archive::write_archive;
use crate::error::OdsResult;
use crate::options::OdsOptions;
use spreadbase_core::Document;

pub use content::encode_content_xml;

/// ODS file writer
///
/// The generated archive holds only what a consumer needs to open the
/// spreadsheet: the manifest and content.xml.
pub struct OdsWriter;

impl OdsWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(
        document: &Document,
        path: P,
        options: &OdsOptions,
    ) -> OdsResult<()> {
        let file = File::create(path)?;
        Self::write(document, file, options)?;
        Ok(())
    }

    /// Write a document to a writer, returning the writer
    pub fn write<W: Write + Seek>(
        document: &Document,
        writer: W,
        options: &OdsOptions,
    ) -> OdsResult<W> {
        document.check_has_tables()?;

        let content = encode_content_xml(document, options)?;
        log::debug!(
            "writing ODS archive: {} tables, content.xml {} bytes",
            document.table_count(),
            content.len()
        );

        write_archive(writer, content.as_bytes())
    }

    /// Encode a document to archive bytes
    pub fn to_bytes(document: &Document, options: &OdsOptions) -> OdsResult<Vec<u8>> {
        Self::write(document, Cursor::new(Vec::new()), options).map(Cursor::into_inner)
    }
}
