//! Table of rows keyed by header name

use std::io::{BufRead, BufReader, Read};

use crate::config::Config;
use crate::error::Result;
use crate::parser;

use super::row::Row;

/// Ordered header names plus ordered rows, both in file order
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    delimiter: Option<char>,
    config: Config,
}

impl Table {
    /// Create an empty table with default parsing options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given parsing options
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Build a table from raw text
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.load_text(text);
        table
    }

    /// Build a table by draining a readable source
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut table = Self::new();
        table.load_from_reader(source)?;
        Ok(table)
    }

    /// Parse `text`, appending its columns and rows to what the table already holds.
    ///
    /// Never fails: empty or headerless input leaves the table unchanged.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        self.load_text(text);
        Ok(())
    }

    /// Drain `source` line by line, rejoin with `\n` and load the result.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn load_from_reader<R: Read>(&mut self, source: R) -> Result<()> {
        let mut content = String::new();
        for line in BufReader::new(source).lines() {
            content.push_str(&line?);
            content.push('\n');
        }
        self.load_from_str(&content)
    }

    fn load_text(&mut self, text: &str) {
        if let Some(delimiter) =
            parser::parse_text(text, &self.config, &mut self.columns, &mut self.rows)
        {
            self.delimiter = Some(delimiter);
        }
    }

    /// Copy of the header names
    pub fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of the first column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Delimiter used by the most recent load
    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Append a hand-built row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Row> {
        self.rows.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a mut Table {
    type Item = &'a mut Row;
    type IntoIter = std::slice::IterMut<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter_mut()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_well_formed_rows() {
        let table = Table::from_text("id,name\n1,Alice\n2,Bob\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names(), vec!["id", "name"]);
        assert_eq!(table.delimiter(), Some(','));

        let first = table.get(0).unwrap();
        assert_eq!(first.at("id").unwrap().to_i32().unwrap(), 1);
        assert_eq!(first.at("name").unwrap().to_string(), "Alice");
        assert_eq!(table.get(1).unwrap().at("name").unwrap().as_str(), "Bob");
    }

    #[test]
    fn test_short_line() {
        let table = Table::from_text("a,b,c\nx,y");
        let row = table.get(0).unwrap();
        assert_eq!(row.at("a").unwrap().as_str(), "x");
        assert_eq!(row.at("b").unwrap().as_str(), "y");
        assert!(matches!(row.at("c"), Err(Error::ColumnNotFound(_))));
    }

    #[test]
    fn test_extra_fields_dropped() {
        let table = Table::from_text("a,b\nx,y,z");
        let row = table.get(0).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.at("a").unwrap().as_str(), "x");
        assert_eq!(row.at("b").unwrap().as_str(), "y");
    }

    #[test]
    fn test_empty_input() {
        let mut table = Table::new();
        assert!(table.load_from_str("").is_ok());
        assert!(table.columns().is_empty());
        assert!(table.is_empty());
        assert_eq!(table.delimiter(), None);
    }

    #[test]
    fn test_header_only() {
        let table = Table::from_text("a;b;c\n");
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
        assert_eq!(table.delimiter(), Some(';'));
    }

    #[test]
    fn test_header_not_trimmed() {
        let table = Table::from_text(" a ;b\n1;2");
        assert_eq!(table.column_names(), vec![" a ", "b"]);
        assert_eq!(table.column_index(" a "), Some(0));
        assert_eq!(table.column_index("a"), None);
    }

    #[test]
    fn test_from_reader_normalizes_crlf() {
        let table = Table::from_reader("a\tb\r\n1\t2\r\n".as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.get(0).unwrap().at("b").unwrap().as_str(), "2");
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = &[b'a', b'\n', 0xff, 0xfe];
        assert!(matches!(Table::from_reader(bytes), Err(Error::Io(_))));
    }

    #[test]
    fn test_loads_accumulate() {
        let mut table = Table::new();
        table.load_from_str("a,b\n1,2").unwrap();
        table.load_from_str("c;d\n3;4").unwrap();

        assert_eq!(table.column_names(), vec!["a", "b", "c", "d"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.delimiter(), Some(';'));

        // later rows pair against the accumulated header
        let second = table.get(1).unwrap();
        assert_eq!(second.at("a").unwrap().as_str(), "3");
        assert_eq!(second.at("b").unwrap().as_str(), "4");
        assert!(second.at("c").is_err());
    }

    #[test]
    fn test_iteration_in_file_order() {
        let mut table = Table::from_text("n\n1\n2\n3");
        let values: Vec<i64> = table
            .iter()
            .map(|row| row.at("n").unwrap().to_i64().unwrap())
            .collect();
        assert_eq!(values, vec![1, 2, 3]);

        for row in &mut table {
            row.at_mut("n").unwrap().set_number(0);
        }
        assert!(table
            .into_iter()
            .all(|row| row.at("n").unwrap().as_str() == "0"));
    }

    #[test]
    fn test_push_row() {
        let mut table = Table::new();
        let mut row = Row::new();
        row.insert("x", 1.5_f64);
        table.push_row(row);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().at("x").unwrap().to_f32().unwrap(), 1.5);
    }
}
