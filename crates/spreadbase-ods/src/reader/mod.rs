//! ODS reader

mod content;

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::archive::read_content;
use crate::error::OdsResult;
use crate::options::OdsOptions;
use spreadbase_core::Document;

pub use content::decode_content_xml;

/// ODS file reader
///
/// Only content.xml is consulted; every other archive entry is ignored.
pub struct OdsReader;

impl OdsReader {
    /// Read a document from a file path
    ///
    /// The returned document is bound to `path`, so it can be saved back.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &OdsOptions) -> OdsResult<Document> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut document = Self::read(BufReader::new(file), options)?;
        document.set_path(Some(path));
        Ok(document)
    }

    /// Read a document from a reader
    pub fn read<R: Read + Seek>(reader: R, options: &OdsOptions) -> OdsResult<Document> {
        let content = read_content(reader)?;
        log::debug!("read content.xml ({} bytes)", content.len());

        decode_content_xml(&content, options)
    }

    /// Decode a document from archive bytes
    pub fn from_bytes(bytes: &[u8], options: &OdsOptions) -> OdsResult<Document> {
        Self::read(Cursor::new(bytes), options)
    }
}
