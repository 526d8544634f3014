//! In-memory table of company records.

use std::path::{Path, PathBuf};

use crate::error::{QueryError, QueryResult};
use crate::model::CellValue;

/// Lookup key column.
pub const COMPANY: &str = "Company";
/// Revenue metric column.
pub const REVENUE: &str = "Revenue";
/// Profit metric column.
pub const PROFIT: &str = "Profit";

/// Company records as read from the spreadsheet.
///
/// Every row has exactly `headers.len()` cells. Columns other than
/// [`COMPANY`], [`REVENUE`] and [`PROFIT`] are carried through untouched.
#[derive(Debug, Clone)]
pub struct CompanyTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    source: PathBuf,
}

impl CompanyTable {
    /// Build a table, padding short rows with empty cells and truncating
    /// long ones to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>, source: impl Into<PathBuf>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            headers,
            rows,
            source: source.into(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column the current query cannot do without.
    pub fn require_column(&self, name: &str) -> QueryResult<usize> {
        self.column_index(name)
            .ok_or_else(|| QueryError::MissingColumn(name.to_string()))
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }

    /// Indices of the first row for each distinct company name, in table order.
    pub fn first_per_company(&self, company_col: usize) -> Vec<usize> {
        let mut seen = std::collections::HashSet::new();
        (0..self.rows.len())
            .filter(|&i| seen.insert(self.rows[i][company_col].distinct_key()))
            .collect()
    }
}
