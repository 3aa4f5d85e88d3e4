//! A single parsed record

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::CellValue;
use crate::error::{Error, Result};

/// Mapping from column name to cell value
///
/// Lookup is by key only. Iteration order is unspecified; use the owning
/// table's column list for header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: FxHashMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell for a column, failing if it was never inserted
    pub fn at(&self, column: &str) -> Result<&CellValue> {
        self.cells
            .get(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }

    /// Mutable variant of [`Row::at`]
    pub fn at_mut(&mut self, column: &str) -> Result<&mut CellValue> {
        self.cells
            .get_mut(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }

    /// Get the cell for a column, if present
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Insert or overwrite the cell for a column
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> &mut CellValue {
        let slot = self.cells.entry(column.into()).or_default();
        *slot = value.into();
        slot
    }

    /// Check if a cell was inserted for this column
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over (column, cell) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
