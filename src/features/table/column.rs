//! Value columns and their kind inference.

use serde::Serialize;
use tracing::debug;

use crate::core::{parse_leading_int, round_half_up, seconds_to_time, time_to_seconds};

/// How the cells of a column are read and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plain integers.
    Numeric,
    /// Integers followed by `%`.
    Percentage,
    /// `minutes:seconds`, stored as seconds.
    Time,
    /// At least one cell was not a number; never plotted.
    Text,
}

impl ColumnKind {
    /// Pick a kind from the first data cell seen in a column.
    #[must_use]
    pub fn classify(cell: &str) -> Self {
        if cell.contains('%') {
            Self::Percentage
        } else if cell.contains(':') {
            Self::Time
        } else {
            Self::Numeric
        }
    }

    /// Read a cell as a number of this kind.
    #[must_use]
    pub fn parse(self, cell: &str) -> Option<i64> {
        match self {
            Self::Numeric | Self::Percentage => parse_leading_int(cell),
            Self::Time => time_to_seconds(cell),
            Self::Text => None,
        }
    }

    /// Suffix printed after values.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Percentage => "%",
            Self::Numeric | Self::Time | Self::Text => "",
        }
    }

    /// Print a value the way cells of this kind are written.
    #[must_use]
    pub fn format_value(self, value: i64) -> String {
        match self {
            Self::Time => seconds_to_time(value),
            _ => format!("{value}{}", self.unit()),
        }
    }

    /// Whether columns of this kind get a sparkline.
    #[must_use]
    pub const fn is_plottable(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Percentage => "percentage",
            Self::Time => "time",
            Self::Text => "text",
        })
    }
}

/// A fully parsed value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Position in the row; 0 is the date column so this starts at 1.
    pub index: usize,
    /// Header text without its `!` marker. Empty when the table has no header.
    pub header: String,
    /// Final kind after every row was seen.
    pub kind: ColumnKind,
    /// Values oldest first. Empty for text columns.
    pub values: Vec<i64>,
    /// Smallest value.
    pub min: Option<i64>,
    /// Largest value.
    pub max: Option<i64>,
    /// Sum of all values, wide enough that it cannot overflow.
    pub sum: i128,
}

impl Column {
    /// Number of values.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Mean value rounded to the nearest integer, if there are any values.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn average(&self) -> Option<i64> {
        if self.values.is_empty() {
            return None;
        }
        Some(round_half_up(self.sum as f64 / self.values.len() as f64) as i64)
    }

    /// Whether this column gets a sparkline.
    #[must_use]
    pub fn is_plottable(&self) -> bool {
        self.kind.is_plottable() && !self.values.is_empty()
    }
}

/// Accumulates one column while rows are scanned.
///
/// The kind stays open until the first data cell arrives and can only move
/// to [`ColumnKind::Text`] afterwards.
#[derive(Debug, Clone)]
pub(crate) struct ColumnBuilder {
    index: usize,
    header: String,
    kind: Option<ColumnKind>,
    values: Vec<i64>,
    min: Option<i64>,
    max: Option<i64>,
    sum: i128,
}

impl ColumnBuilder {
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index,
            header: String::new(),
            kind: None,
            values: Vec::new(),
            min: None,
            max: None,
            sum: 0,
        }
    }

    pub(crate) fn set_header(&mut self, header: &str) {
        self.header = header.to_string();
    }

    /// Feed one data cell.
    pub(crate) fn push_cell(&mut self, cell: &str) {
        let kind = *self.kind.get_or_insert_with(|| {
            let kind = ColumnKind::classify(cell);
            debug!(column = self.index, %kind, "classified column");
            kind
        });

        if kind == ColumnKind::Text {
            return;
        }

        let Some(value) = kind.parse(cell) else {
            debug!(column = self.index, cell, "non-numeric cell, column is now text");
            self.kind = Some(ColumnKind::Text);
            self.values.clear();
            self.min = None;
            self.max = None;
            self.sum = 0;
            return;
        };

        self.values.push(value);
        self.sum += i128::from(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Close the column. A column that never saw a data cell is text.
    pub(crate) fn finish(self) -> Column {
        Column {
            index: self.index,
            header: self.header,
            kind: self.kind.unwrap_or(ColumnKind::Text),
            values: self.values,
            min: self.min,
            max: self.max,
            sum: self.sum,
        }
    }
}
