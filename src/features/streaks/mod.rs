//! Daily streaks: chains of consecutive dates and the status shown above
//! the sparklines.

pub mod chains;
pub mod metrics;

pub use chains::{get_chains, longest_chain_length, Chain};
pub use metrics::StreakInfo;
