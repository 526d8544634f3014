//! Tabular data model.

mod cell;
mod table;

pub use cell::CellValue;
pub use table::{CompanyTable, COMPANY, PROFIT, REVENUE};
