//! Prelude module - common imports for spreadbase users
//!
//! ```rust
//! use spreadbase::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellValue,
    ColumnIdentifier,
    // Main types
    Document,
    // Extension traits
    DocumentExt,
    // Error types
    Error,
    OdsError,
    // I/O types
    OdsOptions,
    OdsReader,
    OdsWriter,
    Result,
    Table,
};
