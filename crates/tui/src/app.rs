//! Application state management for the TUI.

use std::path::PathBuf;
use std::time::Instant;

use insights::query::CompanyProfile;
use insights::{answer, load_table, CompanyTable, LoadOptions, QueryError, QueryOptions, QueryOutcome};

use crate::config::Settings;

/// Main application state.
pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Loaded spreadsheet
    pub table: Option<CompanyTable>,
    /// User-visible reason the last load failed
    pub load_error: Option<String>,
    /// Current input mode
    pub input_mode: InputMode,
    /// Query being typed
    pub input: String,
    /// Last submitted query
    pub last_query: Option<String>,
    /// Answer to the last submitted query
    pub answer: Option<Result<QueryOutcome, QueryError>>,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// First visible row on the Data tab
    pub data_scroll: usize,
    pub source: PathBuf,
    pub load_options: LoadOptions,
    pub query_options: QueryOptions,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            current_tab: Tab::Answer,
            should_quit: false,
            table: None,
            load_error: None,
            input_mode: InputMode::Normal,
            input: String::new(),
            last_query: None,
            answer: None,
            status_message: None,
            data_scroll: 0,
            source: settings.file.clone(),
            load_options: settings.load_options(),
            query_options: settings.query_options(),
        }
    }

    /// (Re)load the spreadsheet. Failures are kept for display, never fatal.
    pub fn load(&mut self) {
        match load_table(&self.source, &self.load_options) {
            Ok(table) => {
                self.set_status(format!("Loaded {} rows", table.len()));
                self.table = Some(table);
                self.load_error = None;
            }
            Err(e) => {
                self.table = None;
                self.load_error = Some(e.to_string());
            }
        }
        self.answer = None;
        self.data_scroll = 0;
    }

    /// Answer the query in the input box.
    pub fn submit_query(&mut self) {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return;
        }
        let Some(table) = &self.table else {
            self.set_status("No data loaded. Press 'r' to reload the file.");
            return;
        };

        tracing::info!(query = %query, "query submitted");
        self.answer = Some(answer(table, &query, self.query_options));
        self.last_query = Some(query);
        self.input.clear();
        self.current_tab = Tab::Answer;
    }

    /// Profile of the last matched company, if the last answer was one.
    pub fn profile(&self) -> Option<&CompanyProfile> {
        match &self.answer {
            Some(Ok(QueryOutcome::CompanyProfile(profile))) => Some(profile),
            _ => None,
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Move to previous tab.
    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-5).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    pub fn scroll_down(&mut self) {
        let rows = self.table.as_ref().map_or(0, CompanyTable::len);
        if self.data_scroll + 1 < rows {
            self.data_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.data_scroll = self.data_scroll.saturating_sub(1);
    }
}

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Answer,
    RevenueModel,
    MarketShare,
    ProfitDistribution,
    Data,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Answer => Tab::RevenueModel,
            Tab::RevenueModel => Tab::MarketShare,
            Tab::MarketShare => Tab::ProfitDistribution,
            Tab::ProfitDistribution => Tab::Data,
            Tab::Data => Tab::Answer,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Answer => Tab::Data,
            Tab::RevenueModel => Tab::Answer,
            Tab::MarketShare => Tab::RevenueModel,
            Tab::ProfitDistribution => Tab::MarketShare,
            Tab::Data => Tab::ProfitDistribution,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Answer,
            2 => Tab::RevenueModel,
            3 => Tab::MarketShare,
            4 => Tab::ProfitDistribution,
            5 => Tab::Data,
            _ => Tab::Answer,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Answer => 0,
            Tab::RevenueModel => 1,
            Tab::MarketShare => 2,
            Tab::ProfitDistribution => 3,
            Tab::Data => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Answer => "Answer",
            Tab::RevenueModel => "Revenue Model",
            Tab::MarketShare => "Market Share",
            Tab::ProfitDistribution => "Profit Distribution",
            Tab::Data => "Data",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::Answer,
            Tab::RevenueModel,
            Tab::MarketShare,
            Tab::ProfitDistribution,
            Tab::Data,
        ]
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}
