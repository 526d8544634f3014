//! Data tab UI.

use insights::CellValue;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

use super::draw_placeholder;
use crate::app::App;

/// Draw the Data tab: every loaded row, scrolled to `app.data_scroll`.
pub fn draw_data_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(table) = &app.table else {
        let message = app
            .load_error
            .as_deref()
            .unwrap_or("No data loaded. Press [r] to reload the file.");
        draw_placeholder(frame, area, "Data", message, Color::DarkGray);
        return;
    };

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .skip(app.data_scroll)
        .map(|r| Row::new(r.iter().map(CellValue::to_string).collect::<Vec<_>>()))
        .collect();

    let title = format!(
        " {}  (row {} of {}) ",
        app.source.display(),
        (app.data_scroll + 1).min(table.len()),
        table.len()
    );

    let widths = vec![Constraint::Fill(1); table.headers().len().max(1)];
    let widget = Table::new(rows, widths)
        .header(
            Row::new(table.headers().to_vec())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}
