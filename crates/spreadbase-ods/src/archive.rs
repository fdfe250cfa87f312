//! ODS container: a ZIP archive holding the manifest and content.xml

use std::io::{Read, Seek, Write};

use zip::result::ZipError;

use crate::error::{OdsError, OdsResult};

pub(crate) const MANIFEST_PATH: &str = "META-INF/manifest.xml";
pub(crate) const CONTENT_PATH: &str = "content.xml";

const MANIFEST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
  <manifest:file-entry manifest:media-type="application/vnd.oasis.opendocument.spreadsheet" manifest:version="1.2" manifest:full-path="/"/>
  <manifest:file-entry manifest:media-type="text/xml" manifest:full-path="content.xml"/>
</manifest:manifest>"#;

/// Write the manifest and `content` into a new archive
pub(crate) fn write_archive<W: Write + Seek>(writer: W, content: &[u8]) -> OdsResult<W> {
    let mut zip = zip::ZipWriter::new(writer);
    let options = zip::write::SimpleFileOptions::default();

    zip.start_file(MANIFEST_PATH, options)?;
    zip.write_all(MANIFEST_XML.as_bytes())?;

    zip.start_file(CONTENT_PATH, options)?;
    zip.write_all(content)?;

    Ok(zip.finish()?)
}

/// Read content.xml out of an archive
pub(crate) fn read_content<R: Read + Seek>(reader: R) -> OdsResult<String> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let mut file = match archive.by_name(CONTENT_PATH) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(OdsError::MissingPart(CONTENT_PATH.into())),
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    String::from_utf8(bytes).map_err(|e| OdsError::InvalidText(format!("{}: {}", CONTENT_PATH, e)))
}
