//! Column addressing
//!
//! Columns are addressed either by a 0-based index or by spreadsheet letters
//! (bijective base 26: `A` = 0, `Z` = 25, `AA` = 26, ..., `AMJ` = 1023).

use std::fmt;

use crate::error::{Error, Result};
use crate::MAX_COLUMNS;

/// A column reference, as accepted by the [`Table`](crate::Table) accessors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnIdentifier {
    /// 0-based index; negative values are rejected
    Index(isize),
    /// Spreadsheet letters, case insensitive
    Letters(String),
}

impl ColumnIdentifier {
    /// Resolve to a 0-based column index within the sheet width
    pub fn resolve(&self) -> Result<usize> {
        match self {
            ColumnIdentifier::Index(index) => {
                if *index < 0 {
                    return Err(Error::InvalidColumnIndex(*index));
                }
                let index = *index as usize;
                if index >= MAX_COLUMNS {
                    return Err(Error::ColumnOutOfRange {
                        index,
                        max: MAX_COLUMNS as isize - 1,
                    });
                }
                Ok(index)
            }
            ColumnIdentifier::Letters(letters) => letters_to_column(letters),
        }
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnIdentifier::Index(index) => write!(f, "{}", index),
            ColumnIdentifier::Letters(letters) => write!(f, "{}", letters),
        }
    }
}

impl From<isize> for ColumnIdentifier {
    fn from(index: isize) -> Self {
        ColumnIdentifier::Index(index)
    }
}

impl From<i32> for ColumnIdentifier {
    fn from(index: i32) -> Self {
        ColumnIdentifier::Index(index as isize)
    }
}

impl From<usize> for ColumnIdentifier {
    fn from(index: usize) -> Self {
        ColumnIdentifier::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<&str> for ColumnIdentifier {
    fn from(letters: &str) -> Self {
        ColumnIdentifier::Letters(letters.to_string())
    }
}

impl From<String> for ColumnIdentifier {
    fn from(letters: String) -> Self {
        ColumnIdentifier::Letters(letters)
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(index: usize) -> Result<String> {
    if index >= MAX_COLUMNS {
        return Err(Error::ColumnOutOfRange {
            index,
            max: MAX_COLUMNS as isize - 1,
        });
    }

    let mut result = String::new();
    let mut n = index + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    Ok(result)
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_column(letters: &str) -> Result<usize> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidLetterIdentifier(letters.to_string()));
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        col = col.saturating_mul(26).saturating_add(digit);
    }

    let col = col - 1; // Convert to 0-based

    if col >= MAX_COLUMNS {
        return Err(Error::ColumnOutOfRange {
            index: col,
            max: MAX_COLUMNS as isize - 1,
        });
    }

    Ok(col)
}
