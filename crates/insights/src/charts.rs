//! Chart series for a single company compared against the leaders.

use serde::Serialize;

use crate::analysis::{numeric_column, rank_rows};
use crate::model::CompanyTable;
use crate::query::Direction;

/// One bar of the revenue comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub company: String,
    /// Missing when the injected company has no numeric revenue.
    pub value: Option<f64>,
}

/// One slice of the profit share chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub company: String,
    pub profit: Option<f64>,
    /// Share of the total of all slices, in percent.
    pub share: f64,
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets spanning their range.
    ///
    /// The last bucket is closed on the right. A degenerate range (all
    /// values equal, or no values) is widened by half a unit on each side.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if values.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Short label for bucket `i`, its lower edge.
    pub fn bin_label(&self, i: usize) -> String {
        format!("{:.0}", self.edges[i])
    }
}

/// The three charts shown for a matched company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyCharts {
    pub revenue_model: Vec<BarDatum>,
    pub market_share: Vec<PieSlice>,
    pub profit_distribution: Histogram,
}

/// Column positions the charts read from.
#[derive(Debug, Clone, Copy)]
pub struct ChartColumns {
    pub company: usize,
    pub revenue: usize,
    pub profit: usize,
}

impl CompanyCharts {
    /// Build the charts for the company whose first row is `company_row`.
    ///
    /// The comparison sets are the `limit` leaders by revenue and by profit
    /// among de-duplicated companies, with the queried company appended when
    /// it is not already one of them.
    pub fn build(
        table: &CompanyTable,
        cols: ChartColumns,
        company_row: usize,
        limit: usize,
        bins: usize,
    ) -> Self {
        let unique = table.first_per_company(cols.company);

        let revenue_rows = with_company(
            table,
            cols.company,
            rank_rows(table, &unique, cols.revenue, limit, Direction::Top),
            company_row,
        );
        let revenue_model = revenue_rows
            .iter()
            .map(|&i| BarDatum {
                company: table.cell(i, cols.company).to_string(),
                value: table.cell(i, cols.revenue).as_f64(),
            })
            .collect();

        let profit_rows = with_company(
            table,
            cols.company,
            rank_rows(table, &unique, cols.profit, limit, Direction::Top),
            company_row,
        );
        let profits: Vec<Option<f64>> = profit_rows
            .iter()
            .map(|&i| table.cell(i, cols.profit).as_f64())
            .collect();
        let total: f64 = profits.iter().map(|p| slice_size(*p)).sum();
        let market_share = profit_rows
            .iter()
            .zip(&profits)
            .map(|(&i, &profit)| PieSlice {
                company: table.cell(i, cols.company).to_string(),
                profit,
                share: if total > 0.0 {
                    slice_size(profit) / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        let profit_distribution = Histogram::compute(&numeric_column(table, cols.profit), bins);

        Self {
            revenue_model,
            market_share,
            profit_distribution,
        }
    }
}

// Negative or missing profit cannot be drawn as a wedge.
fn slice_size(profit: Option<f64>) -> f64 {
    profit.map_or(0.0, |p| p.max(0.0))
}

fn with_company(
    table: &CompanyTable,
    company_col: usize,
    mut leaders: Vec<usize>,
    company_row: usize,
) -> Vec<usize> {
    let name = table.cell(company_row, company_col);
    if !leaders.iter().any(|&i| table.cell(i, company_col) == name) {
        leaders.push(company_row);
    }
    leaders
}
