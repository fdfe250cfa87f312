//! ODS error types

use thiserror::Error;

/// Result type for ODS operations
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur during ODS reading/writing
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required archive entry
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// Value the format can't represent
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Text that isn't valid UTF-8 or contains characters XML can't carry
    #[error("Invalid text: {0}")]
    InvalidText(String),

    /// Unknown `office:value-type`
    #[error("Unrecognized value type found in a cell: {0}")]
    UnrecognizedValueType(String),

    /// `office:boolean-value` other than `true`/`false`
    #[error("Invalid boolean value: {0}")]
    InvalidBooleanValue(String),

    /// Missing or unparseable attribute value
    #[error("Invalid value for attribute {name}: {value:?}")]
    InvalidAttribute { name: String, value: String },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] spreadbase_core::Error),
}

impl OdsError {
    pub(crate) fn invalid_attribute(name: &str, value: &str) -> Self {
        OdsError::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
