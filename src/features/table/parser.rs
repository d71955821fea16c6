//! Markdown table parsing.
//!
//! Rows look like `| 31/12 | 47 | 55% | 12:30 |`. The text before the first
//! pipe and after the last one is not data. Tables are written newest row
//! first, so rows are reversed before anything else happens.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use super::column::{Column, ColumnBuilder};
use crate::core::{parse_day_month, DateEntry};

/// Marker that starts every header cell.
const HEADER_MARKER: char = '!';

/// A parsed table: dates oldest first plus one entry per value column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Dates from the first column, oldest first.
    pub dates: Vec<DateEntry>,
    /// Value columns ordered by position.
    pub columns: Vec<Column>,
}

impl Table {
    /// Parse raw table text.
    ///
    /// Never fails: bad dates become [`DateEntry::Invalid`] and bad cells
    /// turn their column into text. `today` supplies the year for dates
    /// written without one.
    #[must_use]
    pub fn parse(input: &str, today: NaiveDate) -> Self {
        let mut rows = split_rows(input);
        rows.reverse();

        let mut dates = Vec::new();
        let mut builders: Vec<ColumnBuilder> = Vec::new();

        for row in &rows {
            let header = is_header_row(row);

            for (y, &cell) in row.iter().enumerate() {
                if y == 0 {
                    if !header {
                        let entry = parse_day_month(cell, today);
                        if let DateEntry::Invalid(raw) = &entry {
                            debug!(raw = raw.as_str(), "unreadable date");
                        }
                        dates.push(entry);
                    }
                    continue;
                }

                while builders.len() < y {
                    builders.push(ColumnBuilder::new(builders.len() + 1));
                }
                let builder = &mut builders[y - 1];

                if header {
                    builder.set_header(cell.strip_prefix(HEADER_MARKER).unwrap_or(cell));
                } else {
                    builder.push_cell(cell);
                }
            }
        }

        let columns: Vec<Column> = builders.into_iter().map(ColumnBuilder::finish).collect();
        trace!(rows = rows.len(), dates = dates.len(), columns = columns.len(), "parsed table");

        Self { dates, columns }
    }

    /// Columns that get a sparkline, in position order.
    pub fn plottable_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_plottable())
    }
}

/// Split text into rows of trimmed cells.
fn split_rows(input: &str) -> Vec<Vec<&str>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            // A line without two pipes has no cells
            if parts.len() < 3 {
                return None;
            }
            Some(parts[1..parts.len() - 1].iter().copied().map(str::trim).collect())
        })
        .collect()
}

fn is_header_row(row: &[&str]) -> bool {
    row.iter().any(|cell| cell.starts_with(HEADER_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::table::ColumnKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 13).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> DateEntry {
        DateEntry::Valid(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    const SAMPLE: &str = "
        |!Date|!Val|!Percentage|!Time|
        |12/02|50|44%|12:30|
        |11/02|42|32%|13:05|
        |10/02|48|07%|11:59|
    ";

    #[test]
    fn test_split_rows_drops_outer_fragments() {
        let rows = split_rows("| 31/12 | 47 | 55 |\n\n|1/1|2|3|");
        assert_eq!(rows, vec![vec!["31/12", "47", "55"], vec!["1/1", "2", "3"]]);
    }

    #[test]
    fn test_split_rows_ignores_lines_without_cells() {
        assert!(split_rows("no pipes here\n|").is_empty());
    }

    #[test]
    fn test_rows_are_reversed() {
        let table = Table::parse(SAMPLE, today());
        assert_eq!(table.dates, vec![ymd(2024, 2, 10), ymd(2024, 2, 11), ymd(2024, 2, 12)]);
        assert_eq!(table.columns[0].values, vec![48, 42, 50]);
    }

    #[test]
    fn test_headers_and_kinds() {
        let table = Table::parse(SAMPLE, today());
        let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["Val", "Percentage", "Time"]);

        let kinds: Vec<ColumnKind> = table.columns.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ColumnKind::Numeric, ColumnKind::Percentage, ColumnKind::Time]);
        assert_eq!(table.columns[2].values, vec![719, 785, 750]);
    }

    #[test]
    fn test_header_row_adds_no_date() {
        let table = Table::parse("|!Date|!Val|\n|1/1/23|5|", today());
        assert_eq!(table.dates.len(), 1);
    }

    #[test]
    fn test_text_column_is_not_plottable() {
        let table = Table::parse("|3/2|1|n/a|\n|2/2|2|4|\n|1/2|3|5|", today());
        assert_eq!(table.columns[1].kind, ColumnKind::Text);
        let plotted: Vec<usize> = table.plottable_columns().map(|c| c.index).collect();
        assert_eq!(plotted, vec![1]);
    }

    #[test]
    fn test_empty_input() {
        let table = Table::parse("", today());
        assert!(table.dates.is_empty());
        assert!(table.columns.is_empty());
        assert_eq!(table.plottable_columns().count(), 0);
    }

    #[test]
    fn test_bad_date_is_kept_as_invalid() {
        let table = Table::parse("|someday|4|", today());
        assert_eq!(table.dates, vec![DateEntry::Invalid("someday".to_string())]);
        assert_eq!(table.columns[0].values, vec![4]);
    }
}
