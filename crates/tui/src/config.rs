//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use insights::{LoadOptions, QueryOptions};

#[derive(Parser, Debug, Clone)]
#[command(name = "insights-tui")]
#[command(about = "Ask questions about a spreadsheet of company financials", long_about = None)]
pub struct Settings {
    /// Spreadsheet to load (xlsx, xls, xlsb, ods or csv)
    #[arg(short, long, env = "INSIGHTS_FILE", default_value = "Data212.xlsx")]
    pub file: PathBuf,

    /// Worksheet name (default: first worksheet)
    #[arg(short, long, env = "INSIGHTS_SHEET")]
    pub sheet: Option<String>,

    /// Rows in top/bottom rankings and leaders in each chart
    #[arg(short, long, env = "INSIGHTS_LIMIT", default_value = "5",
          value_parser = clap::value_parser!(u16).range(1..))]
    pub limit: u16,

    /// Buckets in the profit histogram
    #[arg(short, long, env = "INSIGHTS_BINS", default_value = "20",
          value_parser = clap::value_parser!(u16).range(1..))]
    pub bins: u16,

    /// Log file used while the dashboard owns the terminal
    #[arg(long, env = "INSIGHTS_LOG_FILE", default_value = "insights-tui.log")]
    pub log_file: PathBuf,

    /// Answer a single query, print the result and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the one-shot answer as JSON
    #[arg(long, requires = "query")]
    pub json: bool,
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            sheet: self.sheet.clone(),
        }
    }

    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            limit: usize::from(self.limit),
            bins: usize::from(self.bins),
        }
    }
}
