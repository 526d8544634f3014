//! Plain-text rendering of query outcomes.

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

use crate::charts::CompanyCharts;
use crate::model::CellValue;
use crate::query::{QueryOutcome, RankedRow};

/// Render an outcome as text suitable for a terminal or a log.
pub fn render_text(outcome: &QueryOutcome) -> String {
    let mut out = outcome.headline();
    out.push('\n');

    match outcome {
        QueryOutcome::Ranking { metric, rows, .. } => {
            out.push_str(&ranked_table(metric.column(), rows));
        }
        QueryOutcome::HighestProfit { row } => {
            out.push_str(&ranked_table("Profit", std::slice::from_ref(row)));
        }
        QueryOutcome::CompanyProfile(profile) => {
            let rows: Vec<Vec<String>> = profile
                .rows
                .iter()
                .map(|r| r.iter().map(CellValue::to_string).collect())
                .collect();
            out.push_str(&text_table(&profile.headers, &rows));
            out.push_str(&charts_text(&profile.charts));
        }
        QueryOutcome::CompanyCount { .. }
        | QueryOutcome::NoMatch { .. }
        | QueryOutcome::NoProfitData => {}
    }
    out
}

fn ranked_table(metric: &str, rows: &[RankedRow]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.company.clone(), number(r.value)])
        .collect();
    text_table(&["Company".to_string(), metric.to_string()], &body)
}

fn charts_text(charts: &CompanyCharts) -> String {
    let mut out = String::from("\nRevenue Model\n");
    let bars: Vec<Vec<String>> = charts
        .revenue_model
        .iter()
        .map(|b| vec![b.company.clone(), b.value.map(number).unwrap_or_default()])
        .collect();
    out.push_str(&text_table(&["Company".to_string(), "Revenue".to_string()], &bars));

    out.push_str("\nMarket Share\n");
    let slices: Vec<Vec<String>> = charts
        .market_share
        .iter()
        .map(|s| {
            vec![
                s.company.clone(),
                s.profit.map(number).unwrap_or_default(),
                format!("{:.1}%", s.share),
            ]
        })
        .collect();
    out.push_str(&text_table(
        &["Company".to_string(), "Profit".to_string(), "Share".to_string()],
        &slices,
    ));

    out.push_str("\nProfit Distribution\n");
    let hist = &charts.profit_distribution;
    let bins: Vec<Vec<String>> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            vec![
                format!("{:.2} to {:.2}", hist.edges[i], hist.edges[i + 1]),
                count.to_string(),
            ]
        })
        .collect();
    out.push_str(&text_table(&["Profit".to_string(), "Frequency".to_string()], &bins));
    out
}

fn number(v: f64) -> String {
    CellValue::Number(v).to_string()
}

fn plain_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator(' ')
        .separator(LinePosition::Title, LineSeparator::new('-', ' ', ' ', ' '))
        .padding(0, 1)
        .build()
}

/// Left-aligned columns with a dashed rule under the header.
fn text_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(plain_format());
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
