//! Keyword-driven query classification and dispatch.

mod dispatch;
mod intent;
pub mod keywords;

pub use dispatch::{answer, execute, CompanyProfile, QueryOptions, QueryOutcome, RankedRow};
pub use intent::{Direction, Intent, Metric};
