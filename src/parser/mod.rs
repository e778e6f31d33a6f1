//! Tabular input parsing: scanning, CSV tables and XLSX workbooks

pub mod directory;
pub mod filter;
pub mod header;
pub mod inference;
pub mod text_table;
pub mod workbook;

use std::fmt;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// A single typed cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Render the cell as header text
    pub fn to_header_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Rows of uniformly-columned cells parsed from one file or one sheet.
///
/// Every row holds exactly one value per column; a table cannot be changed
/// once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, checking that every row matches the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> ConversionResult<Self> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(ConversionError::conversion(ConversionErrorKind::text_parse(
                format!(
                    "row {} has {} fields, expected {}",
                    index,
                    row.len(),
                    columns.len()
                ),
                None,
            )));
        }

        Ok(Self { columns, rows })
    }

    /// A table with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate a row as (column, value) pairs in column order
    pub fn row_entries(&self, index: usize) -> Option<impl Iterator<Item = (&str, &CellValue)>> {
        self.rows.get(index).map(|row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter())
        })
    }
}

/// A table together with the name its JSON file is written under
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    pub name: String,
    pub table: Table,
}

impl NamedTable {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}
