//! Number parsing and printing for table cells and SVG coordinates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading integer of a cell: optional sign then digits, the rest is ignored.
static LEADING_INT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?\d+)").unwrap_or_else(|e| panic!("Invalid leading integer regex: {e}"))
});

/// Read the integer at the start of `input`.
///
/// Leading whitespace and trailing junk are tolerated, so `"44%"` reads as
/// `44` and `"07"` as `7`. Returns `None` when no digits lead the text.
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    LEADING_INT
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Convert a `minutes:seconds` string into whole seconds.
///
/// Returns `None` when the total does not fit in an `i64`.
#[must_use]
pub fn time_to_seconds(input: &str) -> Option<i64> {
    let mut parts = input.split(':');
    let minutes = parse_leading_int(parts.next()?)?;
    let seconds = parse_leading_int(parts.next()?)?;
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Convert seconds into `m:ss`.
#[must_use]
pub fn seconds_to_time(seconds: i64) -> String {
    format!("{}:{:02}", seconds.div_euclid(60), seconds.rem_euclid(60))
}

/// Round to the nearest integer with halves going up (`-2.5` → `-2`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Print a coordinate rounded to three decimals in its shortest form.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`, which is how
/// single-point and flat series come out.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let rounded = round_half_up(value * 1000.0) / 1000.0;
    // avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}
