//! Output formatting for the `stats` command.
//!
//! This module turns a parsed table into a report and formats it either for
//! the terminal or as JSON.

mod json;
mod pretty;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::DateEntry;
use crate::error::SparklineError;
use crate::features::streaks::StreakInfo;
use crate::features::table::{Column, ColumnKind, Table};

pub use json::*;
pub use pretty::*;

/// Summary of one value column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column position, starting at 1.
    pub index: usize,
    /// Header text.
    pub header: String,
    /// Final column kind.
    pub kind: ColumnKind,
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: Option<i64>,
    /// Largest value.
    pub max: Option<i64>,
    /// Rounded mean.
    pub average: Option<i64>,
    /// Values oldest first.
    pub values: Vec<i64>,
}

impl From<&Column> for ColumnSummary {
    fn from(column: &Column) -> Self {
        Self {
            index: column.index,
            header: column.header.clone(),
            kind: column.kind,
            count: column.count(),
            min: column.min,
            max: column.max,
            average: column.average(),
            values: column.values.clone(),
        }
    }
}

/// Everything `stats` knows about a table.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// The day the report was made for.
    pub today: NaiveDate,
    /// Number of dated rows.
    pub rows: usize,
    /// Date cells that could not be read.
    pub invalid_dates: Vec<String>,
    /// Chain and streak status.
    pub streak: StreakInfo,
    /// One entry per value column.
    pub columns: Vec<ColumnSummary>,
}

impl StatsReport {
    /// Build a report for `table` as of `today`.
    #[must_use]
    pub fn build(table: &Table, today: NaiveDate) -> Self {
        let invalid_dates = table
            .dates
            .iter()
            .filter_map(|d| match d {
                DateEntry::Invalid(raw) => Some(raw.clone()),
                DateEntry::Valid(_) => None,
            })
            .collect();

        Self {
            today,
            rows: table.dates.len(),
            invalid_dates,
            streak: StreakInfo::calculate(&table.dates, today),
            columns: table.columns.iter().map(ColumnSummary::from).collect(),
        }
    }
}

/// Format a stats report based on output format
///
/// # Errors
///
/// Returns `SparklineError::Parse` if JSON serialization fails.
pub fn format_stats(report: &StatsReport, format: OutputFormat) -> Result<String, SparklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 13).unwrap()
    }

    #[test]
    fn test_report_counts_rows_and_bad_dates() {
        let table = Table::parse("|!Date|!Val|\n|12/02|5|\n|whenever|4|\n|10/02|3|", today());
        let report = StatsReport::build(&table, today());

        assert_eq!(report.rows, 3);
        assert_eq!(report.invalid_dates, vec!["whenever".to_string()]);
        assert_eq!(report.columns.len(), 1);
        assert_eq!(report.columns[0].header, "Val");
        assert_eq!(report.columns[0].average, Some(4));
    }
}
