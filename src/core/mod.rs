//! Core helpers shared by the table parser, streak analyzer and renderer.
//!
//! Everything here is a pure function of its arguments; callers pass the
//! invocation's `today` explicitly instead of reading the clock.

mod datetime;
mod format;

pub use datetime::{
    days_difference, parse_day_month, same_year, short_string, to_days_and_weeks, DateEntry,
};
pub use format::{format_number, parse_leading_int, round_half_up, seconds_to_time, time_to_seconds};
