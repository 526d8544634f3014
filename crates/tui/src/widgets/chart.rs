//! Chart widgets for company comparisons.

use insights::{BarDatum, CellValue, Histogram, PieSlice};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

const SLICE_COLORS: [Color; 6] = [
    Color::Green,
    Color::Cyan,
    Color::LightGreen,
    Color::Blue,
    Color::LightCyan,
    Color::Magenta,
];

/// Width of each bar so that `count` bars with `gap` spacing fill `width`.
pub fn bar_width(width: u16, count: usize, gap: u16, max: u16) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let inner = width.saturating_sub(2);
    (inner / count).saturating_sub(gap).clamp(1, max)
}

fn format_value(v: f64) -> String {
    CellValue::Number(v.round()).to_string()
}

// Bar heights are unsigned; negative values draw as empty bars but keep their label.
fn height(v: Option<f64>, scale: f64) -> u64 {
    v.map_or(0, |v| (v.max(0.0) * scale).round() as u64)
}

/// Revenue of the leaders plus the queried company.
pub fn create_revenue_chart<'a>(bars: &[BarDatum], highlight: &str, width: u16) -> BarChart<'a> {
    let bars: Vec<Bar> = bars
        .iter()
        .map(|b| {
            let color = if b.company == highlight {
                Color::Yellow
            } else {
                Color::Cyan
            };
            Bar::default()
                .value(height(b.value, 1.0))
                .text_value(b.value.map(format_value).unwrap_or_default())
                .label(Line::from(b.company.clone()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let gap = 2;
    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Revenue Model "),
        )
        .bar_width(bar_width(width, bars.len(), gap, 20))
        .bar_gap(gap)
        .data(BarGroup::default().bars(&bars))
}

/// Profit share of the leaders plus the queried company, one horizontal bar
/// per slice.
pub fn create_market_share_chart<'a>(slices: &[PieSlice], highlight: &str) -> BarChart<'a> {
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = if s.company == highlight {
                Color::Yellow
            } else {
                SLICE_COLORS[i % SLICE_COLORS.len()]
            };
            Bar::default()
                // Tenths of a percent keep one decimal of resolution.
                .value(height(Some(s.share), 10.0))
                .text_value(format!("{:.1}%", s.share))
                .label(Line::from(s.company.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Market Share "),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(1000)
        .data(BarGroup::default().bars(&bars))
}

/// Profit distribution over the whole table.
pub fn create_profit_histogram<'a>(hist: &Histogram, width: u16) -> BarChart<'a> {
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(hist.bin_label(i)))
                .style(Style::default().fg(Color::LightBlue))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let gap = 1;
    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Profit Distribution ({} values) ", hist.total())),
        )
        .bar_width(bar_width(width, bars.len(), gap, 12))
        .bar_gap(gap)
        .data(BarGroup::default().bars(&bars))
}
