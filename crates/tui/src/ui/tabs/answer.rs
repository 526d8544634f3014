//! Answer tab UI.

use insights::query::RankedRow;
use insights::{CellValue, QueryOutcome};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use super::draw_placeholder;
use crate::app::App;

/// Draw the Answer tab.
pub fn draw_answer_tab(frame: &mut Frame, area: Rect, app: &App) {
    if app.table.is_none() {
        let message = app
            .load_error
            .as_deref()
            .unwrap_or("No data loaded. Press [r] to reload the file.");
        draw_placeholder(frame, area, "Answer", message, Color::Red);
        return;
    }

    match &app.answer {
        None => draw_placeholder(
            frame,
            area,
            "Answer",
            "Press [i] and ask about the companies in the spreadsheet.",
            Color::DarkGray,
        ),
        Some(Err(err)) => draw_placeholder(frame, area, "Answer", &err.to_string(), Color::Red),
        Some(Ok(outcome)) => draw_outcome(frame, area, app, outcome),
    }
}

fn draw_outcome(frame: &mut Frame, area: Rect, app: &App, outcome: &QueryOutcome) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline
            Constraint::Min(3),    // Result rows
        ])
        .split(area);

    let query = app.last_query.as_deref().unwrap_or_default();
    let headline_style = if outcome.is_match() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let headline = Paragraph::new(outcome.headline())
        .style(headline_style)
        .block(Block::default().borders(Borders::ALL).title(format!(" {query} ")));
    frame.render_widget(headline, chunks[0]);

    match outcome {
        QueryOutcome::Ranking { metric, rows, .. } => {
            frame.render_widget(ranked_table(metric.column(), rows), chunks[1]);
        }
        QueryOutcome::HighestProfit { row } => {
            frame.render_widget(ranked_table("Profit", std::slice::from_ref(row)), chunks[1]);
        }
        QueryOutcome::CompanyProfile(profile) => {
            let rows: Vec<Row> = profile
                .rows
                .iter()
                .map(|r| Row::new(r.iter().map(CellValue::to_string).collect::<Vec<_>>()))
                .collect();
            let widths = vec![Constraint::Fill(1); profile.headers.len().max(1)];
            let table = Table::new(rows, widths)
                .header(
                    Row::new(profile.headers.clone())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .block(Block::default().borders(Borders::ALL).title(
                    " Records  ([2] Revenue Model  [3] Market Share  [4] Profit Distribution) ",
                ));
            frame.render_widget(table, chunks[1]);
        }
        QueryOutcome::CompanyCount { .. }
        | QueryOutcome::NoMatch { .. }
        | QueryOutcome::NoProfitData => {}
    }
}

fn ranked_table<'a>(metric: &'a str, rows: &[RankedRow]) -> Table<'a> {
    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                format!("{}", i + 1),
                r.company.clone(),
                CellValue::Number(r.value).to_string(),
            ])
        })
        .collect();

    Table::new(
        body,
        [
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Fill(1),
        ],
    )
    .header(
        Row::new(vec!["#", "Company", metric])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL))
}
