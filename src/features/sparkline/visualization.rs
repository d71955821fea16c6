//! SVG sparkline rendering.
//!
//! Each plottable column becomes a set of `<line>` and `<circle>` elements in
//! a 0-100% box, plus a legend entry with its range and average.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::core::{format_number, short_string, DateEntry};
use crate::features::table::{Column, Table};

/// Line colours, assigned to plotted columns in turn.
pub const PALETTE: [&str; 3] = ["#85144b", "#0074D9", "#3D9970"];

/// Radius of the invisible hover target around each point.
const HIT_RADIUS: u32 = 12;
/// Radius of the visible point marker.
const MARKER_RADIUS: u32 = 3;

/// Graphics and legend for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPlot {
    /// Column position, used for the `p{index}` CSS class.
    pub index: usize,
    /// `<line>` and `<circle>` elements for the SVG canvas.
    pub svg: String,
    /// `<span>` entry for the legend line.
    pub legend: String,
}

impl RenderedPlot {
    /// CSS class shared by every element of this plot.
    #[must_use]
    pub fn class(&self) -> String {
        plot_class(self.index)
    }

    /// Colour of this plot. Columns past the palette wrap around.
    #[must_use]
    pub fn colour(&self) -> &'static str {
        PALETTE[self.index.saturating_sub(1) % PALETTE.len()]
    }
}

fn plot_class(index: usize) -> String {
    format!("p{index}")
}

/// Render every plottable column of `table`, in position order.
#[must_use]
pub fn render_plots(table: &Table, today: NaiveDate) -> Vec<RenderedPlot> {
    table
        .plottable_columns()
        .filter_map(|column| render_plot(column, &table.dates, today))
        .collect()
}

/// Render one column. Returns `None` for columns that cannot be plotted.
///
/// A single value or a flat column divides by zero when normalised; those
/// coordinates are left unclamped and print as `NaN`.
#[must_use]
pub fn render_plot(column: &Column, dates: &[DateEntry], today: NaiveDate) -> Option<RenderedPlot> {
    if !column.is_plottable() {
        return None;
    }
    let (min, max) = (column.min?, column.max?);
    let class = plot_class(column.index);
    let points = coordinates(&column.values, min, max);

    let mut svg = String::new();
    let mut previous: Option<(String, String)> = None;

    for (i, (&value, (x, y))) in column.values.iter().zip(points).enumerate() {
        let (x, y) = (format_number(x), format_number(y));
        let date = dates.get(i).map(|d| short_string(d, today)).unwrap_or_default();
        let title = format!("{} [{date}]", column.kind.format_value(value));

        if let Some((x1, y1)) = &previous {
            let _ = writeln!(
                svg,
                r#"<line class="{class}" x1="{x1}%" x2="{x}%" y1="{y1}%" y2="{y}%"></line>"#
            );
        }
        let _ = writeln!(
            svg,
            r#"<circle class="{class} clear" cx="{x}%" cy="{y}%" r="{HIT_RADIUS}"><title>{title}</title></circle>"#
        );
        let _ = writeln!(
            svg,
            r#"<circle class="{class}" cx="{x}%" cy="{y}%" r="{MARKER_RADIUS}"><title>{title}</title></circle>"#
        );

        previous = Some((x, y));
    }

    Some(RenderedPlot {
        index: column.index,
        svg,
        legend: legend(column, min, max),
    })
}

/// Legend entry: header, range and rounded average.
fn legend(column: &Column, min: i64, max: i64) -> String {
    let kind = column.kind;
    let average = column.average().unwrap_or_default();
    format!(
        r#"<span class="{}"><strong>{}</strong> {}&ndash;{} Avg {}</span>"#,
        plot_class(column.index),
        column.header,
        kind.format_value(min),
        kind.format_value(max),
        kind.format_value(average),
    )
}

/// Evenly spaced x, y scaled so the maximum sits at the top.
#[allow(clippy::cast_precision_loss)]
fn coordinates(values: &[i64], min: i64, max: i64) -> Vec<(f64, f64)> {
    let last = values.len().saturating_sub(1) as f64;
    // in f64 so extreme columns cannot overflow
    let (min, range) = (min as f64, max as f64 - min as f64);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = 100.0 * (i as f64 / last);
            let y = 100.0 - (100.0 * (v as f64 - min)) / range;
            (x, y)
        })
        .collect()
}
