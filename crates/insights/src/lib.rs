//! # insights
//!
//! Answers keyword-style questions about a spreadsheet of company financial
//! records: top and bottom rankings by revenue or profit, company counts,
//! the most profitable company, and per-company profiles with chart series.
//!
//! ```no_run
//! use std::path::Path;
//! use insights::{answer, load_table, render_text, LoadOptions, QueryOptions};
//!
//! let table = load_table(Path::new("Data212.xlsx"), &LoadOptions::default())?;
//! let outcome = answer(&table, "top 5 companies by revenue", QueryOptions::default())?;
//! println!("{}", render_text(&outcome));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod charts;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod report;

pub use charts::{BarDatum, CompanyCharts, Histogram, PieSlice};
pub use error::{LoadError, QueryError};
pub use loader::{load_table, LoadOptions};
pub use model::{CellValue, CompanyTable};
pub use query::{answer, Intent, QueryOptions, QueryOutcome};
pub use report::render_text;
