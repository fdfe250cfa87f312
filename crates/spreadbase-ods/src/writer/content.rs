//! content.xml encoding
//!
//! Every row and cell is written individually; no run-length compression is
//! produced.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rust_decimal::Decimal;

use crate::error::{OdsError, OdsResult};
use crate::names::*;
use crate::options::OdsOptions;
use spreadbase_core::{CellValue, Document, Table};

const NAMESPACES: &[(&str, &str)] = &[
    ("xmlns:office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("xmlns:style", "urn:oasis:names:tc:opendocument:xmlns:style:1.0"),
    ("xmlns:table", "urn:oasis:names:tc:opendocument:xmlns:table:1.0"),
    ("xmlns:text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    ("xmlns:fo", "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"),
    ("xmlns:number", "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0"),
    ("xmlns:of", "urn:oasis:names:tc:opendocument:xmlns:of:1.2"),
    ("office:version", "1.2"),
];

/// Encode a document to the content.xml payload
pub fn encode_content_xml(document: &Document, options: &OdsOptions) -> OdsResult<String> {
    let writer = if options.prettify {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };
    let mut encoder = ContentEncoder { writer };

    encoder.write_document(document)?;

    String::from_utf8(encoder.writer.into_inner()).map_err(|e| OdsError::InvalidText(e.to_string()))
}

struct ContentEncoder {
    writer: Writer<Vec<u8>>,
}

impl ContentEncoder {
    fn write_document(&mut self, document: &Document) -> OdsResult<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.start(DOCUMENT_CONTENT, NAMESPACES)?;

        self.start(AUTOMATIC_STYLES, &[])?;
        self.write_data_styles()?;
        for (style_name, width) in &document.column_width_styles {
            self.write_column_width_style(style_name, width)?;
        }
        self.end(AUTOMATIC_STYLES)?;

        self.start(BODY, &[])?;
        self.start(SPREADSHEET, &[])?;
        for table in &document.tables {
            self.write_table(table)?;
        }
        self.end(SPREADSHEET)?;
        self.end(BODY)?;

        self.end(DOCUMENT_CONTENT)
    }

    /// Fixed styles referenced by date, datetime and boolean cells
    fn write_data_styles(&mut self) -> OdsResult<()> {
        self.start("number:date-style", &[(STYLE_NAME, "N37")])?;
        self.empty("number:month", &[("number:style", "long")])?;
        self.number_text("/")?;
        self.empty("number:day", &[("number:style", "long")])?;
        self.number_text("/")?;
        self.empty("number:year", &[])?;
        self.end("number:date-style")?;

        self.start("number:date-style", &[(STYLE_NAME, "N5050")])?;
        self.empty("number:month", &[])?;
        self.number_text("/")?;
        self.empty("number:day", &[])?;
        self.number_text("/")?;
        self.empty("number:year", &[])?;
        self.number_text(" ")?;
        self.empty("number:hours", &[("number:style", "long")])?;
        self.number_text(":")?;
        self.empty("number:minutes", &[("number:style", "long")])?;
        self.number_text(" ")?;
        self.empty("number:am-pm", &[])?;
        self.end("number:date-style")?;

        self.start("number:boolean-style", &[(STYLE_NAME, "N99")])?;
        self.empty("number:boolean", &[])?;
        self.end("number:boolean-style")?;

        for (name, data_style) in [(DATE_STYLE, "N37"), (DATETIME_STYLE, "N5050"), (BOOLEAN_STYLE, "N99")] {
            self.empty(
                STYLE,
                &[
                    (STYLE_NAME, name),
                    (STYLE_FAMILY, "table-cell"),
                    ("style:data-style-name", data_style),
                ],
            )?;
        }

        Ok(())
    }

    fn write_column_width_style(&mut self, style_name: &str, width: &str) -> OdsResult<()> {
        check_xml_text(style_name)?;
        check_xml_text(width)?;

        self.start(STYLE, &[(STYLE_NAME, style_name), (STYLE_FAMILY, "table-column")])?;
        self.empty(TABLE_COLUMN_PROPERTIES, &[(COLUMN_WIDTH, width)])?;
        self.end(STYLE)
    }

    fn write_table(&mut self, table: &Table) -> OdsResult<()> {
        check_table_name(table.name())?;
        self.start(TABLE, &[(TABLE_NAME, table.name())])?;

        // Columns keep their position: unstyled columns before the last styled
        // one are written bare. At least one column element is required.
        let styles = table.column_width_styles();
        match styles.iter().rposition(Option::is_some) {
            Some(last) => {
                for style_name in &styles[..=last] {
                    match style_name {
                        Some(style_name) => {
                            check_xml_text(style_name)?;
                            self.empty(TABLE_COLUMN, &[(TABLE_STYLE_NAME, style_name.as_str())])?
                        }
                        None => self.empty(TABLE_COLUMN, &[])?,
                    }
                }
            }
            None => self.empty(TABLE_COLUMN, &[])?,
        }

        for row in table.data() {
            self.start(TABLE_ROW, &[])?;
            if row.is_empty() {
                // A row needs at least one cell; a bare one decodes back to nothing
                self.empty(TABLE_CELL, &[])?;
            }
            for cell in row {
                self.write_cell(cell.value())?;
            }
            self.end(TABLE_ROW)?;
        }

        self.end(TABLE)
    }

    fn write_cell(&mut self, value: &CellValue) -> OdsResult<()> {
        match value {
            CellValue::Null => self.empty(TABLE_CELL, &[]),
            CellValue::Text(text) => {
                check_xml_text(text)?;
                self.start(TABLE_CELL, &[(VALUE_TYPE, "string")])?;
                for line in text.split('\n') {
                    if line.is_empty() {
                        self.empty(PARAGRAPH, &[])?;
                    } else {
                        self.start(PARAGRAPH, &[])?;
                        self.writer.write_event(Event::Text(BytesText::new(line)))?;
                        self.end(PARAGRAPH)?;
                    }
                }
                self.end(TABLE_CELL)
            }
            CellValue::Date(date) => {
                let encoded = date.format("%Y-%m-%d").to_string();
                self.empty(
                    TABLE_CELL,
                    &[
                        (VALUE_TYPE, "date"),
                        (TABLE_STYLE_NAME, DATE_STYLE),
                        (DATE_VALUE, encoded.as_str()),
                    ],
                )
            }
            CellValue::DateTime(datetime) => {
                let encoded = datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string();
                self.empty(
                    TABLE_CELL,
                    &[
                        (VALUE_TYPE, "date"),
                        (TABLE_STYLE_NAME, DATETIME_STYLE),
                        (DATE_VALUE, encoded.as_str()),
                    ],
                )
            }
            CellValue::Decimal(decimal) => {
                let encoded = format_decimal(decimal);
                self.empty(TABLE_CELL, &[(VALUE_TYPE, "float"), (VALUE, encoded.as_str())])
            }
            CellValue::Float(float) => {
                let encoded = format_float(*float)?;
                self.empty(TABLE_CELL, &[(VALUE_TYPE, "float"), (VALUE, encoded.as_str())])
            }
            CellValue::Integer(integer) => {
                let encoded = integer.to_string();
                self.empty(TABLE_CELL, &[(VALUE_TYPE, "float"), (VALUE, encoded.as_str())])
            }
            CellValue::Boolean(boolean) => self.empty(
                TABLE_CELL,
                &[
                    (VALUE_TYPE, "boolean"),
                    (TABLE_STYLE_NAME, BOOLEAN_STYLE),
                    (BOOLEAN_VALUE, if *boolean { "true" } else { "false" }),
                ],
            ),
        }
    }

    fn number_text(&mut self, text: &str) -> OdsResult<()> {
        self.start("number:text", &[])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end("number:text")
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> OdsResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> OdsResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> OdsResult<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

/// Plain notation, always with a decimal point so it decodes as fractional
fn format_float(value: f64) -> OdsResult<String> {
    if !value.is_finite() {
        return Err(OdsError::UnsupportedValue(format!(
            "non-finite float {} can't be stored in a cell",
            value
        )));
    }

    Ok(with_decimal_point(value.to_string()))
}

fn format_decimal(value: &Decimal) -> String {
    with_decimal_point(value.to_string())
}

fn with_decimal_point(mut encoded: String) -> String {
    if !encoded.contains('.') {
        encoded.push_str(".0");
    }
    encoded
}

/// XML 1.0 only allows tab, newline and carriage return among control characters
/// A table name must be present and storable; readers reject nameless tables
fn check_table_name(name: &str) -> OdsResult<()> {
    if name.is_empty() {
        return Err(spreadbase_core::Error::MissingTableName.into());
    }
    check_xml_text(name)
}

fn check_xml_text(text: &str) -> OdsResult<()> {
    let is_xml_char = |c: char| {
        matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
    };

    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(OdsError::InvalidText(format!(
            "character U+{:04X} can't be stored in XML (in {:?})",
            c as u32, text
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spreadbase_core::Table;
    use std::str::FromStr;

    fn document_with(rows: Vec<Vec<CellValue>>) -> Document {
        let mut document = Document::new();
        document.add_table(Table::with_data("abc", rows).unwrap());
        document
    }

    fn encode(document: &Document) -> String {
        encode_content_xml(document, &OdsOptions::default()).unwrap()
    }

    #[test]
    fn test_cell_tags() {
        let date = NaiveDate::from_ymd_opt(2012, 4, 10).unwrap();
        let document = document_with(vec![vec![
            CellValue::from(1),
            CellValue::from(1.0),
            CellValue::Decimal(Decimal::from_str("1.33").unwrap()),
            CellValue::from(true),
            CellValue::Date(date),
            CellValue::DateTime(date.and_hms_opt(23, 33, 42).unwrap()),
            CellValue::text("a < b"),
            CellValue::Null,
        ]]);

        let xml = encode(&document);

        assert!(xml.contains(r#"<table:table-cell office:value-type="float" office:value="1"/>"#));
        assert!(xml.contains(r#"<table:table-cell office:value-type="float" office:value="1.0"/>"#));
        assert!(xml.contains(r#"<table:table-cell office:value-type="float" office:value="1.33"/>"#));
        assert!(xml.contains(
            r#"<table:table-cell office:value-type="boolean" table:style-name="boolean" office:boolean-value="true"/>"#
        ));
        assert!(xml.contains(
            r#"<table:table-cell office:value-type="date" table:style-name="date" office:date-value="2012-04-10"/>"#
        ));
        assert!(xml.contains(
            r#"<table:table-cell office:value-type="date" table:style-name="datetime" office:date-value="2012-04-10T23:33:42"/>"#
        ));
        assert!(xml.contains(
            r#"<table:table-cell office:value-type="string"><text:p>a &lt; b</text:p></table:table-cell>"#
        ));
        assert!(xml.contains("<table:table-cell/></table:table-row>"));
    }

    #[test]
    fn test_datetime_keeps_fractional_seconds() {
        let datetime = NaiveDate::from_ymd_opt(2012, 4, 10)
            .unwrap()
            .and_hms_milli_opt(23, 33, 42, 250)
            .unwrap();
        let xml = encode(&document_with(vec![vec![CellValue::DateTime(datetime)]]));
        assert!(xml.contains(r#"office:date-value="2012-04-10T23:33:42.250""#));
    }

    #[test]
    fn test_nameless_table_is_rejected() {
        assert!(matches!(
            check_table_name(""),
            Err(OdsError::Core(spreadbase_core::Error::MissingTableName))
        ));
        assert!(matches!(check_table_name("a\u{0}"), Err(OdsError::InvalidText(_))));
        assert!(check_table_name("Sheet1").is_ok());
    }

    #[test]
    fn test_floats_never_use_exponents() {
        assert_eq!(format_float(1e21).unwrap(), "1000000000000000000000.0");
        assert_eq!(format_float(0.000001).unwrap(), "0.000001");
        assert_eq!(format_float(-2.0).unwrap(), "-2.0");
        assert_eq!(format_decimal(&Decimal::from(7)), "7.0");
    }

    #[test]
    fn test_non_finite_float_is_unsupported() {
        let document = document_with(vec![vec![CellValue::Float(f64::NAN)]]);
        let err = encode_content_xml(&document, &OdsOptions::default()).unwrap_err();
        assert!(matches!(err, OdsError::UnsupportedValue(_)));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let document = document_with(vec![vec![CellValue::text("bell\u{7}")]]);
        let err = encode_content_xml(&document, &OdsOptions::default()).unwrap_err();
        assert!(matches!(err, OdsError::InvalidText(_)));
    }

    #[test]
    fn test_multiline_text_uses_one_paragraph_per_line() {
        let document = document_with(vec![vec![CellValue::text("one\n\ntwo")]]);
        let xml = encode(&document);
        assert!(xml.contains("<text:p>one</text:p><text:p/><text:p>two</text:p>"));
    }

    #[test]
    fn test_columns() {
        let mut table = Table::new("styled").unwrap();
        table.set_column_width_styles(vec![None, Some("co1".into()), None]);
        let mut document = Document::new();
        document
            .column_width_styles
            .insert("co1".into(), "2.5cm".into());
        document.add_table(table);
        document.add_table(Table::new("bare").unwrap());

        let xml = encode(&document);

        assert!(xml.contains(
            r#"<style:style style:name="co1" style:family="table-column"><style:table-column-properties style:column-width="2.5cm"/></style:style>"#
        ));
        assert!(xml.contains(
            r#"<table:table table:name="styled"><table:table-column/><table:table-column table:style-name="co1"/></table:table>"#
        ));
        assert!(xml.contains(r#"<table:table table:name="bare"><table:table-column/></table:table>"#));
    }

    #[test]
    fn test_empty_row_gets_a_bare_cell() {
        let document = document_with(vec![vec![]]);
        let xml = encode(&document);
        assert!(xml.contains("<table:table-row><table:table-cell/></table:table-row>"));
    }

    #[test]
    fn test_prettify() {
        let document = document_with(vec![vec![CellValue::text("x")]]);
        let options = OdsOptions::default().with_prettify(true);
        let xml = encode_content_xml(&document, &options).unwrap();

        assert!(xml.contains("\n  <office:automatic-styles>"));
        assert!(xml.contains("<text:p>x</text:p>"));
    }
}
