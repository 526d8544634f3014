//! Row selection over a numeric column: rankings, maxima, distinct counts.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{CellValue, CompanyTable};
use crate::query::Direction;

/// Pick up to `n` of `candidates` ranked by the numeric value in column `col`.
///
/// Rows whose value is missing are skipped. Ties keep their relative order
/// in `candidates`. `Top` yields descending values, `Bottom` ascending.
pub fn rank_rows(
    table: &CompanyTable,
    candidates: &[usize],
    col: usize,
    n: usize,
    direction: Direction,
) -> Vec<usize> {
    let mut scored: Vec<(usize, f64)> = candidates
        .iter()
        .filter_map(|&i| table.cell(i, col).as_f64().map(|v| (i, v)))
        .collect();

    // sort_by is stable, so equal values stay in table order.
    scored.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Top => ord.reverse(),
            Direction::Bottom => ord,
        }
    });

    scored.into_iter().take(n).map(|(i, _)| i).collect()
}

/// Rank every row of the table.
pub fn rank_all(table: &CompanyTable, col: usize, n: usize, direction: Direction) -> Vec<usize> {
    let all: Vec<usize> = (0..table.len()).collect();
    rank_rows(table, &all, col, n, direction)
}

/// First row holding the maximum value of column `col`, if any row is numeric.
pub fn index_of_max(table: &CompanyTable, col: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for i in 0..table.len() {
        if let Some(v) = table.cell(i, col).as_f64() {
            if best.map_or(true, |(_, b)| v > b) {
                best = Some((i, v));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Number of distinct non-empty values in column `col`.
pub fn distinct_count(table: &CompanyTable, col: usize) -> usize {
    table
        .rows()
        .iter()
        .map(|row| &row[col])
        .filter(|cell| !cell.is_empty())
        .map(CellValue::distinct_key)
        .collect::<HashSet<_>>()
        .len()
}

/// All numeric values of column `col`, in table order.
pub fn numeric_column(table: &CompanyTable, col: usize) -> Vec<f64> {
    table
        .rows()
        .iter()
        .filter_map(|row| row[col].as_f64())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[(&str, Option<f64>)]) -> CompanyTable {
        let rows = values
            .iter()
            .map(|(name, v)| {
                vec![
                    CellValue::Text(name.to_string()),
                    v.map_or(CellValue::Empty, CellValue::Number),
                ]
            })
            .collect();
        CompanyTable::new(vec!["Company".into(), "Revenue".into()], rows, "t.csv")
    }

    #[test]
    fn test_rank_top_descending_with_stable_ties() {
        let t = table(&[("A", Some(10.0)), ("B", Some(30.0)), ("C", Some(10.0)), ("D", Some(20.0))]);
        assert_eq!(rank_all(&t, 1, 3, Direction::Top), vec![1, 3, 0]);
    }

    #[test]
    fn test_rank_bottom_ascending_skips_missing() {
        let t = table(&[("A", None), ("B", Some(30.0)), ("C", Some(-5.0)), ("D", Some(20.0))]);
        assert_eq!(rank_all(&t, 1, 5, Direction::Bottom), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_respects_candidates() {
        let t = table(&[("A", Some(1.0)), ("B", Some(2.0)), ("C", Some(3.0))]);
        assert_eq!(rank_rows(&t, &[0, 1], 1, 5, Direction::Top), vec![1, 0]);
    }

    #[test]
    fn test_index_of_max_returns_first_maximum() {
        let t = table(&[("A", Some(5.0)), ("B", Some(9.0)), ("C", Some(9.0)), ("D", None)]);
        assert_eq!(index_of_max(&t, 1), Some(1));
        assert_eq!(index_of_max(&table(&[("A", None)]), 1), None);
    }

    #[test]
    fn test_distinct_count_ignores_empty_cells() {
        let rows = ["A", "B", "A", ""]
            .iter()
            .map(|name| vec![CellValue::from_raw(name)])
            .collect();
        let t = CompanyTable::new(vec!["Company".into()], rows, "t.csv");
        assert_eq!(distinct_count(&t, 0), 2);
    }

    #[test]
    fn test_distinct_count_keeps_kinds_apart() {
        let rows = vec![
            vec![CellValue::Number(1.0)],
            vec![CellValue::Text("1".into())],
            vec![CellValue::Number(1.0)],
            vec![CellValue::Bool(true)],
            vec![CellValue::Text("true".into())],
        ];
        let t = CompanyTable::new(vec!["Company".into()], rows, "t.csv");
        assert_eq!(distinct_count(&t, 0), 4);
    }
}
