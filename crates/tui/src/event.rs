//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, InputMode, Tab};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global shortcuts (work in all modes)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if app.input_mode == InputMode::Normal => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('r') => {
            app.load();
            if let Some(err) = app.load_error.clone() {
                app.set_status(err);
            }
        }

        // Tab navigation
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => app.goto_tab(c as u8 - b'0'),

        // Tab-specific actions
        _ => {
            if app.current_tab == Tab::Data {
                handle_data_tab_keys(app, key);
            }
        }
    }
}

fn handle_data_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Home | KeyCode::Char('g') => app.data_scroll = 0,
        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.submit_query();
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with_csv, SAMPLE};
    use insights::QueryOutcome;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submitting_a_query() {
        let (_file, mut app) = app_with_csv(SAMPLE);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // 'q' is plain text while editing.
        type_text(&mut app, "how many companiesq");
        press(&mut app, KeyCode::Backspace);
        assert!(!app.should_quit);
        assert_eq!(app.input, "how many companies");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.answer,
            Some(Ok(QueryOutcome::CompanyCount { count: 3 }))
        );
    }

    #[test]
    fn test_escape_keeps_draft() {
        let (_file, mut app) = app_with_csv(SAMPLE);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "acme");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.input, "acme");
        assert!(app.answer.is_none());
    }

    #[test]
    fn test_navigation_and_quit() {
        let (_file, mut app) = app_with_csv(SAMPLE);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_tab, Tab::MarketShare);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_tab, Tab::ProfitDistribution);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.current_tab, Tab::MarketShare);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let (_file, mut app) = app_with_csv(SAMPLE);
        press(&mut app, KeyCode::Char('i'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_data_tab_scrolls() {
        let (_file, mut app) = app_with_csv(SAMPLE);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.data_scroll, 2);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.data_scroll, 0);
    }
}
