#![deny(unsafe_code)]

use crate::DatasetName;

/// A loaded sheet: ordered headers plus ordered, possibly ragged, rows.
///
/// A row shorter than a column index simply has no cell there. Cells are kept
/// exactly as read; comparison keys are derived by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub name: DatasetName,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(name: DatasetName, headers: Vec<String>) -> Self {
        Self {
            name,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    /// Cell at a zero-based row and column, absent for ragged rows.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Iterates one column top to bottom, yielding `None` where a row is too short.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |cells| cells.get(column).map(String::as_str))
    }
}
