//! Qualified element and attribute names used in content.xml

// Elements
pub(crate) const DOCUMENT_CONTENT: &str = "office:document-content";
pub(crate) const AUTOMATIC_STYLES: &str = "office:automatic-styles";
pub(crate) const BODY: &str = "office:body";
pub(crate) const SPREADSHEET: &str = "office:spreadsheet";
pub(crate) const ANNOTATION: &str = "office:annotation";
pub(crate) const STYLE: &str = "style:style";
pub(crate) const TABLE_COLUMN_PROPERTIES: &str = "style:table-column-properties";
pub(crate) const TABLE: &str = "table:table";
pub(crate) const TABLE_COLUMN: &str = "table:table-column";
pub(crate) const TABLE_ROW: &str = "table:table-row";
pub(crate) const TABLE_CELL: &str = "table:table-cell";
pub(crate) const COVERED_TABLE_CELL: &str = "table:covered-table-cell";
pub(crate) const PARAGRAPH: &str = "text:p";
pub(crate) const SPACE: &str = "text:s";
pub(crate) const TAB: &str = "text:tab";
pub(crate) const LINE_BREAK: &str = "text:line-break";

// Attributes
pub(crate) const STYLE_NAME: &str = "style:name";
pub(crate) const STYLE_FAMILY: &str = "style:family";
pub(crate) const COLUMN_WIDTH: &str = "style:column-width";
pub(crate) const TABLE_NAME: &str = "table:name";
pub(crate) const TABLE_STYLE_NAME: &str = "table:style-name";
pub(crate) const COLUMNS_REPEATED: &str = "table:number-columns-repeated";
pub(crate) const ROWS_REPEATED: &str = "table:number-rows-repeated";
pub(crate) const VALUE_TYPE: &str = "office:value-type";
pub(crate) const VALUE: &str = "office:value";
pub(crate) const DATE_VALUE: &str = "office:date-value";
pub(crate) const BOOLEAN_VALUE: &str = "office:boolean-value";
pub(crate) const STRING_VALUE: &str = "office:string-value";
pub(crate) const SPACE_COUNT: &str = "text:c";

// Cell styles declared by the encoder's boilerplate
pub(crate) const DATE_STYLE: &str = "date";
pub(crate) const DATETIME_STYLE: &str = "datetime";
pub(crate) const BOOLEAN_STYLE: &str = "boolean";
