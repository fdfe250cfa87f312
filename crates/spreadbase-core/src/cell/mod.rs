//! Cell-related types
//!
//! - [`CellValue`] - The typed value stored in a cell
//! - [`Cell`] - A grid position's content, wrapping one value

mod value;

pub use value::{Cell, CellValue};
