//! # spreadbase-ods
//!
//! ODS (OpenDocument Spreadsheet) reader and writer for spreadbase.
//!
//! Archives produced here contain only the manifest and content.xml; no
//! run-length compression is written, but it is expanded on read.

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

mod archive;
mod names;

pub use error::{OdsError, OdsResult};
pub use options::OdsOptions;
pub use reader::{decode_content_xml, OdsReader};
pub use writer::{encode_content_xml, OdsWriter};

use spreadbase_core::Document;

/// Encode a document to ODS archive bytes
pub fn encode_archive(document: &Document, options: &OdsOptions) -> OdsResult<Vec<u8>> {
    OdsWriter::to_bytes(document, options)
}

/// Decode a document from ODS archive bytes
pub fn decode_archive(bytes: &[u8], options: &OdsOptions) -> OdsResult<Document> {
    OdsReader::from_bytes(bytes, options)
}
