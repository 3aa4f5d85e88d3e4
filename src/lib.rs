//! delimtab - Reader and writer for delimiter-separated tabular text
//!
//! Text is loaded into a [`Table`] of [`Row`]s keyed by header name. The
//! delimiter is sniffed from the header line. Cells keep their raw text and
//! parse to numbers only on request. [`TableWriter`] emits rows back out.
//!
//! ```
//! use delimtab::Table;
//!
//! let table = Table::from_text("id,name\n1,Alice\n2,Bob\n");
//! let first = table.get(0).unwrap();
//! assert_eq!(first.at("id").unwrap().to_i32().unwrap(), 1);
//! assert_eq!(first.at("name").unwrap().as_str(), "Alice");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{CellValue, Row, Table};
pub use writer::TableWriter;
