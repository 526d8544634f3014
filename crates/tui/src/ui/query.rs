//! Query input box.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};

/// Draw the query box, placing the cursor while editing.
pub fn draw_query_box(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.input_mode {
        InputMode::Editing => (app.input.clone(), Style::default().fg(Color::White)),
        InputMode::Normal if !app.input.is_empty() => {
            (app.input.clone(), Style::default().fg(Color::Gray))
        }
        InputMode::Normal => (
            "e.g. \"top 5 companies by revenue\", \"highest profit\", or a company name".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let border_style = if app.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Ask a question "),
    );

    frame.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        let x = cursor_x(area, app.input.chars().count());
        frame.set_cursor_position((x, area.y + 1));
    }
}

// Column after the last typed character, kept inside the box.
fn cursor_x(area: Rect, typed: usize) -> u16 {
    let typed = u16::try_from(typed).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_inside_box() {
        let area = Rect::new(2, 5, 40, 3);
        assert_eq!(cursor_x(area, 0), 3);
        assert_eq!(cursor_x(area, 10), 13);
        assert_eq!(cursor_x(area, 500), 40);
        assert_eq!(cursor_x(Rect::new(u16::MAX - 4, 0, 4, 3), usize::MAX), u16::MAX - 2);
    }
}
