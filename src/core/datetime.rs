//! Date helpers for table rows.
//!
//! Rows carry dates in the short `day/month[/year]` form. These helpers parse
//! that form, measure distances between dates and print dates back in the
//! same short form.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::format::parse_leading_int;

/// A date cell from the first table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum DateEntry {
    /// A real calendar date.
    Valid(NaiveDate),
    /// Text that could not be read as a date, kept verbatim.
    Invalid(String),
}

impl DateEntry {
    /// The calendar date, if the cell held one.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }
}

/// Parse a `day/month[/year]` cell.
///
/// Two-digit years are read as `20YY`; a missing year means the year of
/// `today`. Anything that does not name a real date becomes
/// [`DateEntry::Invalid`].
#[must_use]
pub fn parse_day_month(input: &str, today: NaiveDate) -> DateEntry {
    let input = input.trim();
    let parts: Vec<&str> = input.split('/').collect();

    let year = match parts.get(2).map(|y| y.trim()) {
        None => Some(i64::from(today.year())),
        Some(y) if y.len() == 2 => parse_leading_int(y).map(|y| 2000 + y),
        Some(y) => parse_leading_int(y),
    };
    let day = parse_leading_int(parts[0]);
    let month = parts.get(1).and_then(|m| parse_leading_int(m));

    let date = match (day, month, year) {
        (Some(d), Some(m), Some(y)) => {
            let (Ok(d), Ok(m), Ok(y)) = (u32::try_from(d), u32::try_from(m), i32::try_from(y))
            else {
                return DateEntry::Invalid(input.to_string());
            };
            NaiveDate::from_ymd_opt(y, m, d)
        },
        _ => None,
    };

    date.map_or_else(|| DateEntry::Invalid(input.to_string()), DateEntry::Valid)
}

/// Signed number of whole days from `later` back to `earlier`.
#[must_use]
pub fn days_difference(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Check whether `date` falls in the same year as `today`.
#[must_use]
pub fn same_year(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year()
}

/// Format a date as `d/m`, or `d/m/yy` outside the current year.
///
/// Invalid entries print their original text.
#[must_use]
pub fn short_string(entry: &DateEntry, today: NaiveDate) -> String {
    match entry {
        DateEntry::Valid(date) => {
            if same_year(*date, today) {
                format!("{}/{}", date.day(), date.month())
            } else {
                let year = date.year().to_string();
                let short = &year[year.len().saturating_sub(2)..];
                format!("{}/{}/{short}", date.day(), date.month())
            }
        },
        DateEntry::Invalid(raw) => raw.clone(),
    }
}

/// Describe a number of days in weeks and days.
///
/// ```
/// use sparklines::core::to_days_and_weeks;
///
/// assert_eq!(to_days_and_weeks(3), "3 days");
/// assert_eq!(to_days_and_weeks(9), "1 week, 2 days");
/// ```
#[must_use]
pub fn to_days_and_weeks(days: usize) -> String {
    if days < 7 {
        return format!("{days} day{}", plural(days));
    }

    let weeks = days / 7;
    let days = days % 7;

    // "2 weeks, 0 days" reads badly
    if days == 0 {
        format!("{weeks} week{}", plural(weeks))
    } else {
        format!("{weeks} week{}, {days} day{}", plural(weeks), plural(days))
    }
}

const fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
