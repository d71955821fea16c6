//! Table parsing: raw markdown table text into dates and typed columns.

mod column;
mod parser;

pub use column::{Column, ColumnKind};
pub use parser::Table;
