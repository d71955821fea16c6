//! JSON output formatting.

use serde::Serialize;

use crate::error::SparklineError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SparklineError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SparklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::features::table::Table;
    use crate::output::StatsReport;

    #[test]
    fn test_stats_report_json_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 13).unwrap();
        let table = Table::parse("|!Date|!Done|\n|12/02|44%|\n|11/02|32%|", today);
        let json = to_json(&StatsReport::build(&table, today)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["today"], "2024-02-13");
        assert_eq!(value["rows"], 2);
        assert_eq!(value["streak"]["longest"], 2);
        assert_eq!(value["streak"]["currently_in_chain"], true);
        assert_eq!(value["streak"]["most_recent_chain"][0]["status"], "valid");
        assert_eq!(value["streak"]["most_recent_chain"][0]["value"], "2024-02-11");
        assert_eq!(value["columns"][0]["kind"], "percentage");
        assert_eq!(value["columns"][0]["average"], 38);
    }
}
