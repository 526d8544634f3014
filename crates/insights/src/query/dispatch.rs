//! Route a classified query to the report it asks for.

use serde::Serialize;

use super::intent::{Direction, Intent, Metric};
use super::keywords::title_case;
use crate::analysis::{distinct_count, index_of_max, rank_all};
use crate::charts::{ChartColumns, CompanyCharts};
use crate::error::QueryResult;
use crate::model::{CellValue, CompanyTable, COMPANY, PROFIT, REVENUE};

/// Tunables for answering queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Rows in a top/bottom ranking and leaders in each chart.
    pub limit: usize,
    /// Histogram buckets for the profit distribution.
    pub bins: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { limit: 5, bins: 20 }
    }
}

/// A company paired with one metric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub company: String,
    pub value: f64,
}

/// Every row recorded for one company, plus its charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub company: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub charts: CompanyCharts,
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    Ranking {
        direction: Direction,
        metric: Metric,
        limit: usize,
        rows: Vec<RankedRow>,
    },
    CompanyCount {
        count: usize,
    },
    HighestProfit {
        row: RankedRow,
    },
    CompanyProfile(CompanyProfile),
    NoMatch {
        query: String,
    },
    /// The profit column holds no numeric value to compare.
    NoProfitData,
}

impl QueryOutcome {
    /// The sentence shown above the result.
    pub fn headline(&self) -> String {
        match self {
            QueryOutcome::Ranking {
                direction,
                metric,
                limit,
                ..
            } => format!("{} {} companies by {}:", direction.name(), limit, metric.name()),
            QueryOutcome::CompanyCount { count } => {
                format!("Total number of companies: {count}")
            }
            QueryOutcome::HighestProfit { .. } => "Company with the highest profit:".to_string(),
            QueryOutcome::CompanyProfile(profile) => {
                format!("Data for company: {}", profile.company)
            }
            QueryOutcome::NoMatch { query } => {
                format!("No data found for company: {}", title_case(query))
            }
            QueryOutcome::NoProfitData => "No numeric profit values found.".to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, QueryOutcome::NoMatch { .. } | QueryOutcome::NoProfitData)
    }
}

/// Classify `query` and answer it against `table`.
pub fn answer(table: &CompanyTable, query: &str, options: QueryOptions) -> QueryResult<QueryOutcome> {
    let intent = Intent::classify(query);
    execute(table, &intent, options)
}

/// Answer an already classified query.
pub fn execute(
    table: &CompanyTable,
    intent: &Intent,
    options: QueryOptions,
) -> QueryResult<QueryOutcome> {
    let company_col = table.require_column(COMPANY)?;

    let outcome = match intent {
        Intent::Ranking { direction, metric } => {
            let metric_col = table.require_column(metric.column())?;
            let rows = rank_all(table, metric_col, options.limit, *direction)
                .into_iter()
                .filter_map(|i| ranked_row(table, i, company_col, metric_col))
                .collect();
            QueryOutcome::Ranking {
                direction: *direction,
                metric: *metric,
                limit: options.limit,
                rows,
            }
        }
        Intent::CountCompanies => QueryOutcome::CompanyCount {
            count: distinct_count(table, company_col),
        },
        Intent::HighestProfit => {
            let profit_col = table.require_column(PROFIT)?;
            match index_of_max(table, profit_col)
                .and_then(|i| ranked_row(table, i, company_col, profit_col))
            {
                Some(row) => QueryOutcome::HighestProfit { row },
                None => QueryOutcome::NoProfitData,
            }
        }
        Intent::CompanyLookup(name) => lookup_company(table, name, company_col, options)?,
    };

    tracing::debug!(matched = outcome.is_match(), "answered query");
    Ok(outcome)
}

fn lookup_company(
    table: &CompanyTable,
    name: &str,
    company_col: usize,
    options: QueryOptions,
) -> QueryResult<QueryOutcome> {
    let names: Vec<Option<String>> = (0..table.len())
        .map(|i| {
            let cell = table.cell(i, company_col);
            (!cell.is_empty()).then(|| cell.to_string())
        })
        .collect();

    // Exact title-case matches take priority; otherwise any casing will do.
    let titled = title_case(name);
    let mut matches: Vec<usize> = positions(&names, |n| n == titled);
    if matches.is_empty() {
        let wanted = name.to_lowercase();
        matches = positions(&names, |n| n.trim().to_lowercase() == wanted);
    }

    let Some(&first) = matches.first() else {
        return Ok(QueryOutcome::NoMatch {
            query: name.to_string(),
        });
    };

    let cols = ChartColumns {
        company: company_col,
        revenue: table.require_column(REVENUE)?,
        profit: table.require_column(PROFIT)?,
    };

    Ok(QueryOutcome::CompanyProfile(CompanyProfile {
        company: table.cell(first, company_col).to_string(),
        headers: table.headers().to_vec(),
        rows: matches.iter().map(|&i| table.rows()[i].clone()).collect(),
        charts: CompanyCharts::build(table, cols, first, options.limit, options.bins),
    }))
}

fn positions(names: &[Option<String>], pred: impl Fn(&str) -> bool) -> Vec<usize> {
    names
        .iter()
        .enumerate()
        .filter(|(_, n)| n.as_deref().is_some_and(&pred))
        .map(|(i, _)| i)
        .collect()
}

fn ranked_row(table: &CompanyTable, row: usize, company_col: usize, metric_col: usize) -> Option<RankedRow> {
    Some(RankedRow {
        company: table.cell(row, company_col).to_string(),
        value: table.cell(row, metric_col).as_f64()?,
    })
}
