//! End-to-end tests: load a spreadsheet from disk and answer queries.

use std::io::Write;

use insights::query::{Direction, Metric, RankedRow};
use insights::{answer, load_table, render_text, CompanyTable, LoadOptions, QueryOptions, QueryOutcome};
use rust_xlsxwriter::Workbook;
use tempfile::{Builder, NamedTempFile};

const DATA: &str = "\
Company,Revenue,Profit,Sector
Acme Corp,1200,300,Industrial
Globex,800,-20,Energy
Initech,450,95,Software
Umbrella,3000,720,Pharma
Hooli,2200,410,Software
Stark Industries,5000,1500,Defense
Wayne Enterprises,4100,1300,Conglomerate
Soylent,90,5,Food
Acme Corp,1300,280,Industrial
IBM,2500,600,Tech
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// Same rows as DATA, with numeric columns stored as numbers.
fn write_xlsx(contents: &str) -> NamedTempFile {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("Data212").unwrap();
    for (row, line) in contents.lines().enumerate() {
        for (col, field) in line.split(',').enumerate() {
            let (row, col) = (row as u32, col as u16);
            match field.parse::<f64>() {
                Ok(n) if row > 0 => sheet.write_number(row, col, n).unwrap(),
                _ => sheet.write_string(row, col, field).unwrap(),
            };
        }
    }
    workbook.save(file.path()).unwrap();
    file
}

fn sample_table() -> (NamedTempFile, CompanyTable) {
    let file = write_csv(DATA);
    let table = load_table(file.path(), &LoadOptions::default()).unwrap();
    (file, table)
}

fn ask(table: &CompanyTable, query: &str) -> QueryOutcome {
    answer(table, query, QueryOptions::default()).unwrap()
}

fn ranked(rows: &[(&str, f64)]) -> Vec<RankedRow> {
    rows.iter()
        .map(|(company, value)| RankedRow {
            company: company.to_string(),
            value: *value,
        })
        .collect()
}

#[test]
fn test_top_five_by_revenue() {
    let (_file, table) = sample_table();
    let outcome = ask(&table, "Show me the top 5 companies by revenue");

    assert_eq!(
        outcome,
        QueryOutcome::Ranking {
            direction: Direction::Top,
            metric: Metric::Revenue,
            limit: 5,
            rows: ranked(&[
                ("Stark Industries", 5000.0),
                ("Wayne Enterprises", 4100.0),
                ("Umbrella", 3000.0),
                ("IBM", 2500.0),
                ("Hooli", 2200.0),
            ]),
        }
    );
}

#[test]
fn test_top_companies_by_profit() {
    let (_file, table) = sample_table();
    match ask(&table, "best companies by earnings") {
        QueryOutcome::Ranking { metric, rows, .. } => {
            assert_eq!(metric, Metric::Profit);
            let names: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
            assert_eq!(names, ["Stark Industries", "Wayne Enterprises", "Umbrella", "IBM", "Hooli"]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_bottom_five_by_revenue_ascending() {
    let (_file, table) = sample_table();
    match ask(&table, "bottom 5 companies") {
        QueryOutcome::Ranking {
            direction, rows, ..
        } => {
            assert_eq!(direction, Direction::Bottom);
            assert_eq!(
                rows,
                ranked(&[
                    ("Soylent", 90.0),
                    ("Initech", 450.0),
                    ("Globex", 800.0),
                    ("Acme Corp", 1200.0),
                    ("Acme Corp", 1300.0),
                ])
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_bottom_five_by_profit_includes_losses() {
    let (_file, table) = sample_table();
    match ask(&table, "worst companies by profit") {
        QueryOutcome::Ranking { rows, .. } => {
            assert_eq!(rows[0], ranked(&[("Globex", -20.0)])[0]);
            assert_eq!(rows.len(), 5);
            assert!(rows.windows(2).all(|w| w[0].value <= w[1].value));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_count_distinct_companies() {
    let (_file, table) = sample_table();
    assert_eq!(
        ask(&table, "How many companies are in the sheet?"),
        QueryOutcome::CompanyCount { count: 9 }
    );
}

#[test]
fn test_highest_profit() {
    let (_file, table) = sample_table();
    assert_eq!(
        ask(&table, "Which has the maximum profit?"),
        QueryOutcome::HighestProfit {
            row: ranked(&[("Stark Industries", 1500.0)]).remove(0),
        }
    );
}

#[test]
fn test_company_lookup_is_case_insensitive_and_trimmed() {
    let (_file, table) = sample_table();
    let QueryOutcome::CompanyProfile(profile) = ask(&table, "   acme corp  ") else {
        panic!("expected a company profile");
    };

    assert_eq!(profile.company, "Acme Corp");
    assert_eq!(profile.headers, ["Company", "Revenue", "Profit", "Sector"]);
    assert_eq!(profile.rows.len(), 2);

    let bars: Vec<&str> = profile
        .charts
        .revenue_model
        .iter()
        .map(|b| b.company.as_str())
        .collect();
    assert_eq!(
        bars,
        ["Stark Industries", "Wayne Enterprises", "Umbrella", "IBM", "Hooli", "Acme Corp"]
    );
    assert_eq!(profile.charts.revenue_model[5].value, Some(1200.0));
    assert_eq!(profile.charts.profit_distribution.total(), 10);
    assert_eq!(profile.charts.profit_distribution.counts.len(), 20);
}

#[test]
fn test_single_record_company_already_among_leaders() {
    let (_file, table) = sample_table();
    let QueryOutcome::CompanyProfile(profile) = ask(&table, "ibm") else {
        panic!("expected a company profile");
    };

    assert_eq!(profile.rows.len(), 1);
    assert_eq!(profile.charts.revenue_model.len(), 5);
    assert_eq!(profile.charts.market_share.len(), 5);
    let total: f64 = profile.charts.market_share.iter().map(|s| s.share).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_unknown_text_is_no_match() {
    let (_file, table) = sample_table();
    let outcome = ask(&table, "what is the weather like");
    assert!(!outcome.is_match());
    assert_eq!(
        render_text(&outcome),
        "No data found for company: What Is The Weather Like\n"
    );
}

#[test]
fn test_outcome_serializes_with_kind_tag() {
    let (_file, table) = sample_table();
    let json = serde_json::to_value(ask(&table, "top 5 companies")).unwrap();
    assert_eq!(json["kind"], "ranking");
    assert_eq!(json["direction"], "top");
    assert_eq!(json["rows"][0]["company"], "Stark Industries");

    let json = serde_json::to_value(ask(&table, "Hooli")).unwrap();
    assert_eq!(json["kind"], "company_profile");
    assert_eq!(json["rows"][0][3], "Software");
}

#[test]
fn test_missing_company_column_is_reported() {
    let file = write_csv("Name,Revenue,Profit\nAcme,1,2\n");
    let table = load_table(file.path(), &LoadOptions::default()).unwrap();
    let err = answer(&table, "top 5 companies", QueryOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Column 'Company' not found in the spreadsheet");
}

#[test]
fn test_queries_over_a_workbook() {
    let file = write_xlsx(DATA);
    let table = load_table(file.path(), &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 10);

    assert_eq!(
        answer(&table, "bottom companies by profit", QueryOptions { limit: 3, bins: 20 }).unwrap(),
        QueryOutcome::Ranking {
            direction: Direction::Bottom,
            metric: Metric::Profit,
            limit: 3,
            rows: ranked(&[("Globex", -20.0), ("Soylent", 5.0), ("Initech", 95.0)]),
        }
    );
    assert_eq!(ask(&table, "count the companies"), QueryOutcome::CompanyCount { count: 9 });

    let QueryOutcome::CompanyProfile(profile) = ask(&table, "ibm") else {
        panic!("expected a company profile");
    };
    assert_eq!(profile.company, "IBM");
    assert_eq!(profile.charts.revenue_model.len(), 5);

    let err = load_table(file.path(), &LoadOptions::default().with_sheet("Nope")).unwrap_err();
    assert_eq!(err.to_string(), "An error occurred: worksheet 'Nope' not found");
}
