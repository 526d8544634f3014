//! Chart tabs for the last matched company.

use insights::query::CompanyProfile;
use ratatui::prelude::*;

use super::draw_placeholder;
use crate::app::App;
use crate::widgets::{create_market_share_chart, create_profit_histogram, create_revenue_chart};

const NO_COMPANY: &str = "Ask about a company by name to see its charts.";

fn with_profile(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    draw: impl FnOnce(&mut Frame, Rect, &CompanyProfile),
) {
    match app.profile() {
        Some(profile) => draw(frame, area, profile),
        None => draw_placeholder(frame, area, title, NO_COMPANY, Color::DarkGray),
    }
}

/// Draw the Revenue Model tab: leaders by revenue next to the queried company.
pub fn draw_revenue_model_tab(frame: &mut Frame, area: Rect, app: &App) {
    with_profile(frame, area, app, "Revenue Model", |frame, area, profile| {
        let chart = create_revenue_chart(
            &profile.charts.revenue_model,
            &profile.company,
            area.width,
        );
        frame.render_widget(chart, area);
    });
}

/// Draw the Market Share tab: each company's share of the compared profit.
pub fn draw_market_share_tab(frame: &mut Frame, area: Rect, app: &App) {
    with_profile(frame, area, app, "Market Share", |frame, area, profile| {
        let chart = create_market_share_chart(&profile.charts.market_share, &profile.company);
        frame.render_widget(chart, area);
    });
}

/// Draw the Profit Distribution tab: histogram of every profit in the table.
pub fn draw_profit_distribution_tab(frame: &mut Frame, area: Rect, app: &App) {
    with_profile(frame, area, app, "Profit Distribution", |frame, area, profile| {
        let chart = create_profit_histogram(&profile.charts.profit_distribution, area.width);
        frame.render_widget(chart, area);
    });
}
