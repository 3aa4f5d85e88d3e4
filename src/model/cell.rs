//! String-backed cell value with on-demand numeric parsing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer and float types a cell can be assigned from
pub trait Numeric: sealed::Sealed + fmt::Display + Copy {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}

            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue { text: n.to_string() }
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A single field, stored exactly as read
///
/// Numeric access parses the text each time it is called; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellValue {
    text: String,
}

impl CellValue {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored text verbatim
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Replace the stored text with the decimal rendering of `n`
    pub fn set_number<N: Numeric>(&mut self, n: N) -> &mut Self {
        self.text = n.to_string();
        self
    }

    /// Raw stored text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the cell, returning its text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Check if the stored text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Parse the stored text as any `FromStr` type
    pub fn parse<T: FromStr>(&self) -> Result<T> {
        self.text.parse::<T>().map_err(|_| Error::InvalidNumber {
            value: self.text.clone(),
            target: std::any::type_name::<T>(),
        })
    }

    /// Parse the stored text as a 32-bit integer
    pub fn to_i32(&self) -> Result<i32> {
        self.parse()
    }

    /// Parse the stored text as a 64-bit integer
    pub fn to_i64(&self) -> Result<i64> {
        self.parse()
    }

    /// Parse the stored text as a single-precision float
    pub fn to_f32(&self) -> Result<f32> {
        self.parse()
    }

    /// Parse the stored text as a double-precision float
    pub fn to_f64(&self) -> Result<f64> {
        self.parse()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue {
            text: s.to_string(),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue { text: s }
    }
}

impl From<CellValue> for String {
    fn from(cell: CellValue) -> Self {
        cell.text
    }
}

macro_rules! impl_try_from_cell {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&CellValue> for $t {
                type Error = Error;

                fn try_from(cell: &CellValue) -> Result<Self> {
                    cell.parse()
                }
            }
        )*
    };
}

impl_try_from_cell!(i32, i64, f32, f64);
