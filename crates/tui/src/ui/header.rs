//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const TITLE: &str = "Excel Data Insights Chatbot";

/// Draw the header bar with the title and the loaded source.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let source = match (&app.table, &app.load_error) {
        (Some(table), _) => Span::styled(
            format!("{} ({} rows)", app.source.display(), table.len()),
            Style::default().fg(Color::Gray),
        ),
        (None, Some(err)) => Span::styled(err.clone(), Style::default().fg(Color::Red)),
        (None, None) => Span::styled("loading...", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![Span::styled(TITLE, title_style), Span::raw("  |  "), source]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}
