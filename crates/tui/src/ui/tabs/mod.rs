//! Tab-specific UI modules.

mod answer;
mod charts;
mod data;

pub use answer::draw_answer_tab;
pub use charts::{draw_market_share_tab, draw_profit_distribution_tab, draw_revenue_model_tab};
pub use data::draw_data_tab;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Bordered box with a single centred message.
fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let placeholder = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
    frame.render_widget(placeholder, area);
}
