//! Cell value types

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Whole number
    Integer(i64),

    /// Binary floating point number
    Float(f64),

    /// Exact decimal number
    Decimal(Decimal),

    /// String value
    Text(String),

    /// Calendar date, without time
    Date(NaiveDate),

    /// Date and time of day
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a text value out of UTF-16 code units.
    ///
    /// Text is always held as UTF-8; unpaired surrogates are rejected.
    pub fn from_utf16(units: &[u16]) -> Result<Self> {
        String::from_utf16(units)
            .map(CellValue::Text)
            .map_err(|e| Error::InvalidText(e.to_string()))
    }

    /// Check if the cell is empty
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float; integers and decimals are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CellValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Boolean(_) => "boolean",
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Decimal(_) => "decimal",
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
            CellValue::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NIL"),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Decimal(d) => write!(f, "{}", d),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(n: $ty) -> Self {
                    CellValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Float(f64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Decimal(d)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

/// Zoned timestamps keep their wall-clock time; the offset is not stored.
impl<Tz: TimeZone> From<DateTime<Tz>> for CellValue {
    fn from(dt: DateTime<Tz>) -> Self {
        CellValue::DateTime(dt.naive_local())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// A single grid position's content.
///
/// Cells are plain data: a table replaces them wholesale on assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    value: CellValue,
}

impl Cell {
    /// Wrap a raw value
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// An empty cell
    pub fn null() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn into_value(self) -> CellValue {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Self { value }
    }
}

impl PartialEq<CellValue> for Cell {
    fn eq(&self, other: &CellValue) -> bool {
        &self.value == other
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
