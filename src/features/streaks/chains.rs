//! Splitting a date sequence into chains of consecutive days.

use crate::core::{days_difference, DateEntry};

/// A run of dates where each date is at most one day from the previous one.
pub type Chain = Vec<DateEntry>;

/// Partition `dates` into chains, keeping their order.
///
/// A new chain starts whenever two neighbouring dates are more than one day
/// apart in either direction. An unreadable date has no distance to anything
/// and so never starts a new chain. Empty input gives no chains.
#[must_use]
pub fn get_chains(dates: &[DateEntry]) -> Vec<Chain> {
    let mut chains = Vec::new();
    let mut current: Chain = Vec::new();

    for entry in dates {
        if let Some(previous) = current.last() {
            if is_gap(previous, entry) {
                chains.push(std::mem::take(&mut current));
            }
        }
        current.push(entry.clone());
    }

    if !current.is_empty() {
        chains.push(current);
    }
    chains
}

/// Length of the longest chain, 0 when there are none.
#[must_use]
pub fn longest_chain_length(chains: &[Chain]) -> usize {
    chains.iter().map(Vec::len).max().unwrap_or(0)
}

fn is_gap(previous: &DateEntry, next: &DateEntry) -> bool {
    match (previous.date(), next.date()) {
        (Some(a), Some(b)) => days_difference(b, a).abs() > 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(offset: i64) -> DateEntry {
        let base = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        DateEntry::Valid(base + Duration::days(offset))
    }

    fn days(offsets: &[i64]) -> Vec<DateEntry> {
        offsets.iter().map(|&o| day(o)).collect()
    }

    #[test]
    fn test_empty_has_no_chains() {
        assert!(get_chains(&[]).is_empty());
        assert_eq!(longest_chain_length(&[]), 0);
    }

    #[test]
    fn test_consecutive_dates_form_one_chain() {
        let dates = days(&[0, 1, 2, 3, 4]);
        let chains = get_chains(&dates);
        assert_eq!(chains, vec![dates]);
    }

    #[test]
    fn test_repeated_day_does_not_break_chain() {
        let dates = days(&[0, 1, 1, 2]);
        assert_eq!(get_chains(&dates).len(), 1);
    }

    #[test]
    fn test_gaps_split_chains() {
        let dates = days(&[0, 1, 2, 5, 6, 10]);
        let chains = get_chains(&dates);

        assert_eq!(chains.len(), 3);
        assert_eq!(chains[0], days(&[0, 1, 2]));
        assert_eq!(chains[1], days(&[5, 6]));
        assert_eq!(chains[2], days(&[10]));
        assert_eq!(longest_chain_length(&chains), 3);

        let rejoined: Vec<DateEntry> = chains.into_iter().flatten().collect();
        assert_eq!(rejoined, dates);
    }

    #[test]
    fn test_gap_in_either_direction() {
        let dates = days(&[5, 4, 1]);
        let chains = get_chains(&dates);
        assert_eq!(chains, vec![days(&[5, 4]), days(&[1])]);
    }

    #[test]
    fn test_invalid_date_joins_current_chain() {
        let dates = vec![day(0), DateEntry::Invalid("??".to_string()), day(9)];
        let chains = get_chains(&dates);
        // the invalid entry sits between the two real dates, so neither
        // neighbour pair has a measurable gap
        assert_eq!(chains.len(), 1);
    }
}
