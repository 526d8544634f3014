//! Reusable widgets for the TUI.

mod chart;

pub use chart::{create_market_share_chart, create_profit_histogram, create_revenue_chart};
