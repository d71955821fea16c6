//! Streak status derived from the chains of a table.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::chains::{get_chains, longest_chain_length, Chain};
use crate::core::{days_difference, to_days_and_weeks, DateEntry};

/// Streak information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakInfo {
    /// Chains before the most recent one, oldest first
    pub previous_chains: Vec<Chain>,
    /// The last chain in the table
    pub most_recent_chain: Chain,
    /// Longest chain in the whole table, most recent included
    pub longest: usize,
    /// Days between today and the end of the most recent chain
    pub days_since_end: Option<i64>,
    /// Whether the most recent chain ended today or yesterday
    pub currently_in_chain: bool,
    /// Whether the active chain is at least as long as every other one
    pub is_new_record: bool,
}

impl StreakInfo {
    /// Calculate streak status for `dates` (oldest first) as seen on `today`.
    #[must_use]
    pub fn calculate(dates: &[DateEntry], today: NaiveDate) -> Self {
        let mut previous_chains = get_chains(dates);
        let longest = longest_chain_length(&previous_chains);
        let most_recent_chain = previous_chains.pop().unwrap_or_default();

        let days_since_end = most_recent_chain
            .last()
            .and_then(DateEntry::date)
            .map(|end| days_difference(today, end).abs());
        let currently_in_chain = days_since_end.is_some_and(|days| days <= 1);
        let is_new_record = most_recent_chain.len() >= longest && currently_in_chain;

        debug!(
            chains = previous_chains.len() + usize::from(!most_recent_chain.is_empty()),
            longest,
            current = most_recent_chain.len(),
            currently_in_chain,
            "calculated streak"
        );

        Self {
            previous_chains,
            most_recent_chain,
            longest,
            days_since_end,
            currently_in_chain,
            is_new_record,
        }
    }

    /// Length of the most recent chain.
    #[must_use]
    pub fn current_length(&self) -> usize {
        self.most_recent_chain.len()
    }

    /// Markup describing the active chain, or a nudge when there is none.
    #[must_use]
    pub fn current_chain_text(&self) -> String {
        if self.currently_in_chain {
            format!(
                "Current chain <strong>{}</strong>",
                to_days_and_weeks(self.current_length())
            )
        } else {
            "<strong>Don't break the chain!</strong>".to_string()
        }
    }

    /// Markup describing the best chain so far.
    #[must_use]
    pub fn best_chain_text(&self) -> String {
        if self.is_new_record {
            "<strong>NEW RECORD!</strong>".to_string()
        } else {
            format!("Previous best <strong>{}</strong>", to_days_and_weeks(self.longest))
        }
    }
}
