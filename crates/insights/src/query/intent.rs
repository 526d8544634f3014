//! Free-text query classification.

use serde::Serialize;

use super::keywords::{self, mentions_any};

/// Which numeric column a ranking is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Revenue,
    Profit,
}

impl Metric {
    /// Spreadsheet column holding this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Revenue => crate::model::REVENUE,
            Metric::Profit => crate::model::PROFIT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Revenue => "revenue",
            Metric::Profit => "profit",
        }
    }
}

/// Ranking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Top => "Top",
            Direction::Bottom => "Bottom",
        }
    }
}

/// What a query is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Ranking { direction: Direction, metric: Metric },
    CountCompanies,
    HighestProfit,
    /// Trimmed query text, to be matched against company names.
    CompanyLookup(String),
}

impl Intent {
    /// Classify a query. Branches are tested in a fixed order and the first
    /// match wins.
    pub fn classify(query: &str) -> Self {
        let q = query.to_lowercase();
        let about_companies = mentions_any(&q, keywords::COMPANY);

        let intent = if mentions_any(&q, keywords::TOP) && about_companies {
            Intent::Ranking {
                direction: Direction::Top,
                metric: ranking_metric(&q),
            }
        } else if mentions_any(&q, keywords::BOTTOM) && about_companies {
            Intent::Ranking {
                direction: Direction::Bottom,
                metric: ranking_metric(&q),
            }
        } else if mentions_any(&q, keywords::COUNT) && about_companies {
            Intent::CountCompanies
        } else if mentions_any(&q, keywords::SUPERLATIVE) && q.contains("profit") {
            Intent::HighestProfit
        } else {
            Intent::CompanyLookup(query.trim().to_string())
        };

        tracing::debug!(query, ?intent, "classified query");
        intent
    }
}

// Revenue words win over profit words; revenue is also the default.
fn ranking_metric(q: &str) -> Metric {
    if mentions_any(q, keywords::REVENUE) {
        Metric::Revenue
    } else if mentions_any(q, keywords::PROFIT) {
        Metric::Profit
    } else {
        Metric::Revenue
    }
}
