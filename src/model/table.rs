//! Header, Row, and Table data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered column names shared by every row of a table
///
/// Equality is exact and order-sensitive. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this header with one more trailing column
    pub fn with_column(&self, name: impl Into<String>) -> Self {
        let mut columns = self.0.clone();
        columns.push(name.into());
        Self(columns)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl From<Vec<String>> for Header {
    fn from(columns: Vec<String>) -> Self {
        Self(columns)
    }
}

impl From<Vec<&str>> for Header {
    fn from(columns: Vec<&str>) -> Self {
        Self(columns.into_iter().map(str::to_string).collect())
    }
}

/// A row of text cells, compared and hashed by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this row with one more trailing cell
    pub fn with_cell(&self, value: impl Into<String>) -> Self {
        let mut cells = Vec::with_capacity(self.0.len() + 1);
        cells.extend(self.0.iter().cloned());
        cells.push(value.into());
        Self(cells)
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self(cells.into_iter().map(str::to_string).collect())
    }
}

/// A header plus the rows beneath it
///
/// Every row is as wide as the header; [`Table::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table, checking every row against the header width
    pub fn new(header: Header, rows: Vec<Row>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != header.len())
        {
            return Err(Error::RowWidthMismatch {
                row: idx,
                expected: header.len(),
                found: row.len(),
            });
        }

        Ok(Self { header, rows })
    }

    /// Build a table whose rows are already known to match the header width
    pub(crate) fn from_parts(header: Header, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == header.len()));
        Self { header, rows }
    }

    /// Create an empty table with only a header
    pub fn empty(header: Header) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
