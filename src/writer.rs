//! Streaming writer for delimiter-separated rows

use std::fmt::Display;
use std::io::Write;

use tracing::debug;

use crate::config::{Config, DEFAULT_WRITE_DELIMITER};
use crate::error::{Error, Result};
use crate::model::Row;

/// Write a row of heterogeneous `Display` values through a [`TableWriter`].
///
/// ```
/// use delimtab::{insert_row, TableWriter};
///
/// let mut out = Vec::new();
/// let mut writer = TableWriter::new(&mut out, ["name", "age"]).unwrap();
/// insert_row!(writer, "Alice", 30).unwrap();
/// drop(writer);
/// assert_eq!(String::from_utf8(out).unwrap(), "name,age\nAlice,30\n");
/// ```
#[macro_export]
macro_rules! insert_row {
    ($writer:expr $(, $field:expr)* $(,)?) => {
        $writer.insert_row(&[$(&$field as &dyn ::std::fmt::Display),*])
    };
}

/// Writes a header on construction, then one line per accepted row.
///
/// Fields are neither quoted nor escaped; a field containing the delimiter or
/// a newline corrupts the output.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    sink: W,
    header: Vec<String>,
    delimiter: char,
}

impl<W: Write> TableWriter<W> {
    /// Create a writer using the default `,` delimiter
    pub fn new<I, S>(sink: W, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(sink, columns, DEFAULT_WRITE_DELIMITER)
    }

    /// Create a writer using the configured write delimiter
    pub fn with_config<I, S>(sink: W, columns: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(sink, columns, config.write_delimiter)
    }

    /// Create a writer and emit the header line immediately
    pub fn with_delimiter<I, S>(mut sink: W, columns: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut line = join_line(header.iter(), delimiter);
        line.push('\n');
        sink.write_all(line.as_bytes())?;

        debug!(
            "Wrote header with {} columns, delimiter {:?}",
            header.len(),
            delimiter
        );

        Ok(Self {
            sink,
            header,
            delimiter,
        })
    }

    /// Write one row positionally.
    ///
    /// The field count must equal the header length; otherwise nothing is
    /// written and [`Error::RowShape`] is returned.
    pub fn insert_row(&mut self, fields: &[&dyn Display]) -> Result<()> {
        let expected = self.header.len();
        if fields.len() != expected {
            return Err(Error::RowShape {
                expected,
                actual: fields.len(),
            });
        }

        let mut line = join_line(fields.iter(), self.delimiter);
        line.push('\n');
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Write a parsed row, taking its cells in header order
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        let cells = self
            .header
            .iter()
            .map(|column| row.at(column))
            .collect::<Result<Vec<_>>>()?;
        let fields: Vec<&dyn Display> = cells.iter().map(|c| *c as &dyn Display).collect();
        self.insert_row(&fields)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn join_line<I, D>(fields: I, delimiter: char) -> String
where
    I: IntoIterator<Item = D>,
    D: Display,
{
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push_str(&field.to_string());
    }
    line
}
