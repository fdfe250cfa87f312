//! content.xml decoding
//!
//! The XML is streamed once. An element stack tracks where we are, and one
//! builder per open table, row and cell accumulates the decoded values.
//! Run-length compressed rows and cells are expanded here, except for
//! trailing blanks, which are only counted and dropped if nothing follows.

use chrono::{NaiveDate, NaiveDateTime};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rust_decimal::Decimal;

use crate::error::{OdsError, OdsResult};
use crate::names::*;
use crate::options::OdsOptions;
use spreadbase_core::{Cell, CellValue, Document, Table, MAX_COLUMNS};

/// Rows in the largest sheet office suites produce
const MAX_ROWS: usize = 1_048_576;

/// Longest space run a single `text:s` expands to
const MAX_SPACE_RUN: usize = 1 << 16;

/// Decode a content.xml payload into a document
pub fn decode_content_xml(xml: &str, options: &OdsOptions) -> OdsResult<Document> {
    let mut reader = Reader::from_str(xml);
    let mut decoder = ContentDecoder::new(options);

    loop {
        match reader.read_event()? {
            Event::Start(e) => decoder.open(&e)?,
            Event::Empty(e) => {
                decoder.open(&e)?;
                decoder.close()?;
            }
            Event::End(_) => decoder.close()?,
            Event::Text(e) => decoder.text(&e.unescape()?),
            Event::CData(e) => {
                let text = std::str::from_utf8(&e)
                    .map_err(|e| OdsError::InvalidText(format!("CDATA section: {}", e)))?;
                decoder.text(text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = decoder.stack.last() {
        return Err(OdsError::Xml(quick_xml::Error::UnexpectedEof(
            String::from_utf8_lossy(open).into_owned(),
        )));
    }

    log::debug!("decoded {} tables from content.xml", decoder.document.table_count());

    Ok(decoder.document)
}

struct ContentDecoder<'a> {
    options: &'a OdsOptions,
    document: Document,
    /// Names of the currently open elements, outermost first
    stack: Vec<Vec<u8>>,
    style: Option<ColumnStyleBuilder>,
    table: Option<TableBuilder>,
    row: Option<RowBuilder>,
    cell: Option<CellBuilder>,
}

struct ColumnStyleBuilder {
    name: Option<String>,
    width: Option<String>,
}

struct TableBuilder {
    name: String,
    column_styles: Vec<Option<String>>,
    rows: Vec<Vec<Cell>>,
    /// Empty rows seen since the last non-empty one
    pending_rows: usize,
}

struct RowBuilder {
    repeat: usize,
    cells: Vec<Cell>,
    /// Null cells seen since the last non-null one
    pending_cells: usize,
}

struct CellBuilder {
    repeat: usize,
    value: PendingValue,
    /// Depth of `office:annotation` elements; their text isn't cell content
    annotation_depth: usize,
    /// Cells of sub-tables nested inside this one
    nested_cells: usize,
    paragraph: Option<String>,
    paragraphs: Vec<String>,
}

enum PendingValue {
    Ready(CellValue),
    Text { string_value: Option<String> },
}

impl<'a> ContentDecoder<'a> {
    fn new(options: &'a OdsOptions) -> Self {
        Self {
            options,
            document: Document::new(),
            stack: Vec::new(),
            style: None,
            table: None,
            row: None,
            cell: None,
        }
    }

    fn parent(&self) -> Option<&[u8]> {
        self.stack.last().map(Vec::as_slice)
    }

    fn open(&mut self, e: &BytesStart) -> OdsResult<()> {
        let name = e.name();
        let name = name.as_ref();

        match name {
            n if n == STYLE.as_bytes() && self.parent() == Some(AUTOMATIC_STYLES.as_bytes()) => {
                if attribute(e, STYLE_FAMILY)?.as_deref() == Some("table-column") {
                    self.style = Some(ColumnStyleBuilder {
                        name: attribute(e, STYLE_NAME)?,
                        width: None,
                    });
                }
            }
            n if n == TABLE_COLUMN_PROPERTIES.as_bytes() => {
                if let Some(style) = self.style.as_mut() {
                    style.width = attribute(e, COLUMN_WIDTH)?;
                }
            }
            n if n == TABLE.as_bytes() && self.parent() == Some(SPREADSHEET.as_bytes()) => {
                self.table = Some(TableBuilder {
                    name: attribute(e, TABLE_NAME)?.unwrap_or_default(),
                    column_styles: Vec::new(),
                    rows: Vec::new(),
                    pending_rows: 0,
                });
            }
            n if n == TABLE_COLUMN.as_bytes() && self.row.is_none() => {
                if let Some(table) = self.table.as_mut() {
                    let style_name = attribute(e, TABLE_STYLE_NAME)?;
                    let repeat = repeat_count(e, COLUMNS_REPEATED)?;
                    // Columns past the last addressable one can't hold data
                    let room = MAX_COLUMNS.saturating_sub(table.column_styles.len());
                    let repeat = repeat.min(room);
                    table
                        .column_styles
                        .extend(std::iter::repeat(style_name).take(repeat));
                }
            }
            n if n == TABLE_ROW.as_bytes() && self.row.is_none() => {
                if self.table.is_some() {
                    self.row = Some(RowBuilder {
                        repeat: repeat_count(e, ROWS_REPEATED)?,
                        cells: Vec::new(),
                        pending_cells: 0,
                    });
                }
            }
            n if (n == TABLE_CELL.as_bytes() || n == COVERED_TABLE_CELL.as_bytes())
                && self.cell.is_none() =>
            {
                if self.row.is_some() {
                    self.cell = Some(CellBuilder {
                        repeat: repeat_count(e, COLUMNS_REPEATED)?,
                        value: self.decode_value(e)?,
                        annotation_depth: 0,
                        nested_cells: 0,
                        paragraph: None,
                        paragraphs: Vec::new(),
                    });
                }
            }
            _ => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.open(name, e)?;
                }
            }
        }

        self.stack.push(name.to_vec());
        Ok(())
    }

    fn close(&mut self) -> OdsResult<()> {
        let name = self.stack.pop().unwrap_or_default();
        let name = name.as_slice();

        if name == STYLE.as_bytes() {
            if let Some(style) = self.style.take() {
                self.finish_style(style);
            }
        } else if name == TABLE.as_bytes() && self.parent() == Some(SPREADSHEET.as_bytes()) {
            if let Some(table) = self.table.take() {
                self.finish_table(table)?;
            }
        } else if name == TABLE_ROW.as_bytes() && self.cell.is_none() {
            if let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) {
                table.push_row(row)?;
            }
        } else if (name == TABLE_CELL.as_bytes() || name == COVERED_TABLE_CELL.as_bytes())
            && self.cell.as_ref().map_or(false, CellBuilder::is_outermost)
        {
            if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                let repeat = cell.repeat;
                row.push_cell(cell.finish(), repeat);
            }
        } else if let Some(cell) = self.cell.as_mut() {
            cell.close(name);
        }

        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.push_text(text);
        }
    }

    fn finish_style(&mut self, style: ColumnStyleBuilder) {
        match style {
            ColumnStyleBuilder {
                name: Some(name),
                width: Some(width),
            } => {
                self.document.column_width_styles.insert(name, width);
            }
            ColumnStyleBuilder {
                name: None,
                width: Some(width),
            } => {
                log::warn!("ignoring column style without a name (width {})", width);
            }
            _ => {}
        }
    }

    fn finish_table(&mut self, builder: TableBuilder) -> OdsResult<()> {
        if builder.pending_rows > 0 {
            log::debug!(
                "table {:?}: dropping {} trailing empty rows",
                builder.name,
                builder.pending_rows
            );
        }

        let mut table = Table::new(builder.name)?;
        table.set_column_width_styles(builder.column_styles);
        table.set_data(builder.rows);

        log::debug!(
            "decoded table {:?}: {} rows, {} columns",
            table.name(),
            table.len(),
            table.width()
        );

        self.document.add_table(table);
        Ok(())
    }

    fn decode_value(&self, e: &BytesStart) -> OdsResult<PendingValue> {
        let value_type = match attribute(e, VALUE_TYPE)? {
            Some(value_type) => value_type,
            None => return Ok(PendingValue::Ready(CellValue::Null)),
        };

        let value = match value_type.as_str() {
            "string" => {
                return Ok(PendingValue::Text {
                    string_value: attribute(e, STRING_VALUE)?,
                })
            }
            "date" => decode_date(&required_attribute(e, DATE_VALUE)?)?,
            "float" | "percentage" => decode_number(
                &required_attribute(e, VALUE)?,
                self.options.floats_as_bigdecimal,
            )?,
            "boolean" => match required_attribute(e, BOOLEAN_VALUE)?.as_str() {
                "true" => CellValue::Boolean(true),
                "false" => CellValue::Boolean(false),
                other => return Err(OdsError::InvalidBooleanValue(other.to_string())),
            },
            _ => return Err(OdsError::UnrecognizedValueType(value_type)),
        };

        Ok(PendingValue::Ready(value))
    }
}

impl TableBuilder {
    fn push_row(&mut self, row: RowBuilder) -> OdsResult<()> {
        let RowBuilder { repeat, cells, .. } = row;

        if cells.is_empty() {
            self.pending_rows = self.pending_rows.saturating_add(repeat);
            return Ok(());
        }

        let end = self
            .rows
            .len()
            .saturating_add(self.pending_rows)
            .saturating_add(repeat);
        if end > MAX_ROWS {
            return Err(OdsError::invalid_attribute(ROWS_REPEATED, &repeat.to_string()));
        }

        if self.pending_rows > 0 {
            self.rows
                .extend(std::iter::repeat_with(Vec::new).take(self.pending_rows));
            self.pending_rows = 0;
        }

        if repeat > 1 {
            log::debug!("table {:?}: expanding row repeated {} times", self.name, repeat);
            self.rows
                .extend(std::iter::repeat(cells.clone()).take(repeat - 1));
        }
        self.rows.push(cells);
        Ok(())
    }
}

impl RowBuilder {
    fn push_cell(&mut self, value: CellValue, repeat: usize) {
        if value.is_null() {
            self.pending_cells = self.pending_cells.saturating_add(repeat);
            return;
        }

        if self.pending_cells > 0 {
            let room = MAX_COLUMNS.saturating_sub(self.cells.len());
            self.cells
                .extend(std::iter::repeat_with(Cell::null).take(self.pending_cells.min(room)));
            self.pending_cells = 0;
        }

        // Cells past the last addressable column are dropped
        let room = MAX_COLUMNS.saturating_sub(self.cells.len());
        if repeat > room {
            log::debug!("clipping cell repeated {} times to {} columns", repeat, room);
        }
        self.cells
            .extend(std::iter::repeat(Cell::new(value)).take(repeat.min(room)));
    }
}

impl CellBuilder {
    fn open(&mut self, name: &[u8], e: &BytesStart) -> OdsResult<()> {
        if name == ANNOTATION.as_bytes() {
            self.annotation_depth += 1;
            return Ok(());
        }
        if name == TABLE_CELL.as_bytes() || name == COVERED_TABLE_CELL.as_bytes() {
            self.nested_cells += 1;
            return Ok(());
        }
        if !self.is_outermost() {
            return Ok(());
        }

        if name == PARAGRAPH.as_bytes() {
            self.paragraph = Some(String::new());
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            if name == SPACE.as_bytes() {
                let count = repeat_count(e, SPACE_COUNT)?.min(MAX_SPACE_RUN);
                paragraph.extend(std::iter::repeat(' ').take(count));
            } else if name == TAB.as_bytes() {
                paragraph.push('\t');
            } else if name == LINE_BREAK.as_bytes() {
                paragraph.push('\n');
            }
        }

        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        if name == ANNOTATION.as_bytes() {
            self.annotation_depth = self.annotation_depth.saturating_sub(1);
        } else if name == TABLE_CELL.as_bytes() || name == COVERED_TABLE_CELL.as_bytes() {
            self.nested_cells = self.nested_cells.saturating_sub(1);
        } else if name == PARAGRAPH.as_bytes() && self.is_outermost() {
            if let Some(paragraph) = self.paragraph.take() {
                self.paragraphs.push(paragraph);
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if !self.is_outermost() {
            return;
        }
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }

    /// Outside annotations and nested sub-table cells
    fn is_outermost(&self) -> bool {
        self.annotation_depth == 0 && self.nested_cells == 0
    }

    fn finish(self) -> CellValue {
        match self.value {
            PendingValue::Ready(value) => value,
            PendingValue::Text { string_value } => {
                if self.paragraphs.is_empty() {
                    CellValue::Text(string_value.unwrap_or_default())
                } else {
                    CellValue::Text(self.paragraphs.join("\n"))
                }
            }
        }
    }
}

fn attribute(e: &BytesStart, name: &str) -> OdsResult<Option<String>> {
    match e.try_get_attribute(name).map_err(quick_xml::Error::from)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn required_attribute(e: &BytesStart, name: &str) -> OdsResult<String> {
    attribute(e, name)?.ok_or_else(|| OdsError::invalid_attribute(name, ""))
}

/// Repetition attribute; absent means 1, zero is rejected
fn repeat_count(e: &BytesStart, name: &str) -> OdsResult<usize> {
    match attribute(e, name)? {
        None => Ok(1),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(OdsError::invalid_attribute(name, &raw)),
        },
    }
}

fn decode_date(raw: &str) -> OdsResult<CellValue> {
    let parsed = if raw.contains('T') {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(CellValue::DateTime)
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(CellValue::Date)
    };

    parsed.map_err(|_| OdsError::invalid_attribute(DATE_VALUE, raw))
}

fn decode_number(raw: &str, as_decimal: bool) -> OdsResult<CellValue> {
    let has_exponent = raw.contains(['e', 'E']);

    if !raw.contains('.') && !has_exponent {
        if let Ok(integer) = raw.parse::<i64>() {
            return Ok(CellValue::Integer(integer));
        }
    }

    let invalid = || OdsError::invalid_attribute(VALUE, raw);

    if as_decimal {
        let decimal = if has_exponent {
            Decimal::from_scientific(raw)
        } else {
            Decimal::from_str_exact(raw)
        };
        decimal.map(CellValue::Decimal).map_err(|_| invalid())
    } else {
        match raw.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(CellValue::Float(float)),
            _ => Err(invalid()),
        }
    }
}
