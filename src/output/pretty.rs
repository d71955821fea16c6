use colored::Colorize;

use super::{ColumnSummary, StatsReport};
use crate::core::to_days_and_weeks;
use crate::features::table::ColumnKind;

/// Characters for terminal sparklines, lowest to highest.
const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a terminal sparkline scaled between the smallest and largest value.
///
/// A flat series sits on the middle bar.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_terminal_sparkline(values: &[i64]) -> String {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };

    values
        .iter()
        .map(|&v| {
            if max == min {
                return BAR_CHARS[BAR_CHARS.len() / 2];
            }
            let normalized = (v - min) as f64 / (max - min) as f64 * 7.0;
            BAR_CHARS[(normalized.round() as usize).min(7)]
        })
        .collect()
}

/// Format a stats report for the terminal.
#[must_use]
pub fn format_stats_pretty(report: &StatsReport) -> String {
    let mut output = Vec::new();
    let streak = &report.streak;

    output.push("🔥 STREAK".bold().to_string());
    output.push("─".repeat(50));

    let current = if streak.currently_in_chain {
        to_days_and_weeks(streak.current_length()).green().to_string()
    } else {
        "none".dimmed().to_string()
    };
    output.push(format!(
        "  Current: {}  Longest: {}",
        current,
        to_days_and_weeks(streak.longest)
    ));
    if let Some(days) = streak.days_since_end.filter(|&d| d > 1) {
        output.push(format!("  Days since last entry: {}", days.to_string().red()));
    }
    if streak.is_new_record {
        output.push(format!("  {}", "New record!".yellow().bold()));
    }
    output.push(format!(
        "  Rows: {}  Chains: {}",
        report.rows,
        streak.previous_chains.len() + usize::from(streak.current_length() > 0)
    ));
    if !report.invalid_dates.is_empty() {
        output.push(format!(
            "  Unreadable dates: {}",
            report.invalid_dates.join(", ").yellow()
        ));
    }
    output.push(String::new());

    output.push("📈 COLUMNS".bold().to_string());
    output.push("─".repeat(50));
    if report.columns.is_empty() {
        output.push("  No value columns".dimmed().to_string());
    }
    for column in &report.columns {
        output.push(format_column_pretty(column));
    }

    output.join("\n")
}

fn format_column_pretty(column: &ColumnSummary) -> String {
    let name = if column.header.is_empty() {
        format!("#{}", column.index)
    } else {
        column.header.clone()
    };

    if column.kind == ColumnKind::Text {
        return format!("  {}  {}", name.bold(), "text, not plotted".dimmed());
    }

    let kind = column.kind;
    let range = match (column.min, column.max, column.average) {
        (Some(min), Some(max), Some(avg)) => format!(
            "{}–{}  Avg {}",
            kind.format_value(min),
            kind.format_value(max),
            kind.format_value(avg).cyan()
        ),
        _ => String::new(),
    };

    format!(
        "  {} ({kind})  {}  {}",
        name.bold(),
        range,
        render_terminal_sparkline(&column.values)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::features::table::Table;

    #[test]
    fn test_render_terminal_sparkline() {
        assert_eq!(render_terminal_sparkline(&[0, 7, 3]), "▁█▄");
        assert_eq!(render_terminal_sparkline(&[-5, 5]), "▁█");
        assert_eq!(render_terminal_sparkline(&[2, 2]), "▅▅");
    }

    #[test]
    fn test_render_terminal_sparkline_empty() {
        assert!(render_terminal_sparkline(&[]).is_empty());
    }

    #[test]
    fn test_format_stats_pretty() {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2024, 2, 13).unwrap();
        let table = Table::parse(
            "|!Date|!Val|!Note|\n|12/02|50|ok|\n|11/02|42|fine|\n|10/02|48|good|",
            today,
        );
        let text = format_stats_pretty(&StatsReport::build(&table, today));

        assert!(text.contains("Current: 3 days  Longest: 3 days"));
        assert!(text.contains("New record!"));
        assert!(text.contains("Val (numeric)  42–50  Avg 47"));
        assert!(text.contains("Note  text, not plotted"));
    }
}
