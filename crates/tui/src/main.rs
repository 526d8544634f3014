//! insights-tui - terminal dashboard answering questions about company financials.

mod app;
mod config;
mod event;
mod logging;
mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;
use config::Settings;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    let settings = Settings::parse();

    if let Some(query) = settings.query.clone() {
        logging::init_stderr();
        return run_once(&settings, &query);
    }

    logging::init_file(&settings.log_file)?;
    tracing::info!(file = %settings.file.display(), "starting dashboard");

    // Create app state and load data before taking over the terminal
    let mut app = App::new(&settings);
    app.load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "dashboard stopped");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw UI
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Clear expired status messages
        app.clear_expired_status();

        // Handle events
        if let Some(event) = poll_event(tick_rate)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                _ => {}
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Answer one query on stdout and exit.
fn run_once(settings: &Settings, query: &str) -> anyhow::Result<()> {
    let table = match insights::load_table(&settings.file, &settings.load_options()) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match insights::answer(&table, query, settings.query_options()) {
        Ok(outcome) if settings.json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Ok(outcome) => print!("{}", insights::render_text(&outcome)),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    Ok(())
}
