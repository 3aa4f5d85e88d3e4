//! Data model for tabular data representation

mod cell;
mod row;
mod table;

pub use cell::{CellValue, Numeric};
pub use row::Row;
pub use table::Table;
