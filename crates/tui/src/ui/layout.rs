//! Main layout for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::app::{App, Tab};
use super::footer::draw_footer;
use super::header::draw_header;
use super::query::draw_query_box;
use super::tabs::{
    draw_answer_tab, draw_data_tab, draw_market_share_tab, draw_profit_distribution_tab,
    draw_revenue_model_tab,
};

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Create main layout: header, query, tabs, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Query box
            Constraint::Length(3),  // Tab bar
            Constraint::Min(10),    // Content
            Constraint::Length(2),  // Footer
        ])
        .split(size);

    // Draw header
    draw_header(frame, chunks[0], app);

    // Draw query input
    draw_query_box(frame, chunks[1], app);

    // Draw tab bar
    draw_tab_bar(frame, chunks[2], app);

    // Draw content based on current tab
    let content_area = chunks[3];
    match app.current_tab {
        Tab::Answer => draw_answer_tab(frame, content_area, app),
        Tab::RevenueModel => draw_revenue_model_tab(frame, content_area, app),
        Tab::MarketShare => draw_market_share_tab(frame, content_area, app),
        Tab::ProfitDistribution => draw_profit_distribution_tab(frame, content_area, app),
        Tab::Data => draw_data_tab(frame, content_area, app),
    }

    // Draw footer
    draw_footer(frame, chunks[4], app);
}

/// Draw the tab bar.
fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if *tab == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!(" {} {} ", i + 1, tab.name())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Views "))
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}
