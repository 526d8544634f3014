//! Spreadsheet cell values.

use std::fmt;

use serde::Serialize;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Numeric view of the cell.
    ///
    /// Text that parses as a finite float counts as numeric; everything else
    /// is treated as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => n.is_nan(),
            CellValue::Bool(_) => false,
        }
    }

    /// Equality key for de-duplication: values of different kinds never
    /// collide, so `Number(1.0)` and `Text("1")` stay distinct.
    pub fn distinct_key(&self) -> (u8, String) {
        let kind = match self {
            CellValue::Empty => 0,
            CellValue::Text(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Bool(_) => 3,
        };
        (kind, self.to_string())
    }

    /// Infer a cell from raw CSV text.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => format_number(*n, f),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}
