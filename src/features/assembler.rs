//! Assembles the final markup fragment handed back to the host page.
//!
//! The fragment is, in order: the streak block, a style block with the SVG
//! canvas, the legend line, and finally the raw table echoed back. Each of
//! the streak block, the sparklines and the echo can be switched off.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::debug;

use super::sparkline::{render_plots, RenderedPlot};
use super::streaks::StreakInfo;
use super::table::Table;

/// Class on the wrapping `<div>`; every style rule is scoped under it.
const WRAPPER_CLASS: &str = "sparkline4";

/// Which parts of the fragment to leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Leave out the streak block.
    pub hide_chains: bool,
    /// Leave out the echoed table.
    pub hide_input: bool,
    /// Leave out the style block and SVG canvas.
    pub hide_sparklines: bool,
}

impl RenderOptions {
    /// Read the flags as the host passes them: only the exact text `"true"`
    /// switches a part off.
    #[must_use]
    pub fn from_host_flags(hide_chains: &str, hide_input: &str, hide_sparklines: &str) -> Self {
        Self {
            hide_chains: hide_chains == "true",
            hide_input: hide_input == "true",
            hide_sparklines: hide_sparklines == "true",
        }
    }
}

/// Macro entry point with the host's string flags.
///
/// ```
/// let html = sparklines::run("|12/02|50|\n|11/02|42|", "true", "true", "false");
/// assert!(html.contains("<svg"));
/// assert!(!html.contains("checkbox"));
/// ```
#[must_use]
pub fn run(input: &str, hide_chains: &str, hide_input: &str, hide_sparklines: &str) -> String {
    render(input, &RenderOptions::from_host_flags(hide_chains, hide_input, hide_sparklines))
}

/// Render `input` as of the local date.
#[must_use]
pub fn render(input: &str, options: &RenderOptions) -> String {
    render_at(input, options, Local::now().date_naive())
}

/// Render `input` as of `today`.
///
/// `today` is the single reading of the clock for the whole invocation: it
/// fills in missing years, decides which dates print a year, and decides
/// whether the latest chain is still running.
#[must_use]
pub fn render_at(input: &str, options: &RenderOptions, today: NaiveDate) -> String {
    let table = Table::parse(input, today);

    let plots = if options.hide_sparklines {
        Vec::new()
    } else {
        render_plots(&table, today)
    };
    // A table with no plottable columns gets no canvas at all
    let show_sparklines = !options.hide_sparklines && !plots.is_empty();
    if !options.hide_sparklines && !show_sparklines {
        debug!("no plottable columns, skipping sparklines");
    }

    let mut output = format!(r#"<div class="{WRAPPER_CLASS}">"#);

    if !options.hide_chains {
        let streak = StreakInfo::calculate(&table.dates, today);
        output.push_str(&chain_block(&streak));
    }

    if show_sparklines {
        output.push_str("\n\n");
        output.push_str(&style_block(&plots));
        output.push_str(&svg_canvas(&plots));
    }

    output.push_str(&legend_line(&plots));
    output.push_str("</div>");

    if !options.hide_input {
        output.push_str("\n\n");
        output.push_str(input);
    }

    output
}

/// Streak status wrapped in the host's checkbox widget.
fn chain_block(streak: &StreakInfo) -> String {
    format!(
        r#"<p><$checkbox tag="GTDone"> Done | {} | {}</$checkbox></p>"#,
        streak.current_chain_text(),
        streak.best_chain_text()
    )
}

fn style_block(plots: &[RenderedPlot]) -> String {
    let mut style = format!(
        "<style>
.{WRAPPER_CLASS} svg {{ border-bottom:1px solid #ddd; border-top:1px solid #ddd; max-width: 100%; overflow: visible; padding:2px 0; }}
.{WRAPPER_CLASS} circle {{ stroke-width:0; fill-opacity:0.6; }}
.{WRAPPER_CLASS} circle.clear {{ fill-opacity:0; }}
.{WRAPPER_CLASS} line {{ stroke-width:1px; stroke-opacity:0.8; }}
"
    );
    for plot in plots {
        let (class, colour) = (plot.class(), plot.colour());
        let _ = writeln!(
            style,
            ".{WRAPPER_CLASS} .{class} {{ color:{colour}; fill:{colour}; stroke:{colour}; }}"
        );
    }
    style.push_str("</style>\n");
    style
}

fn svg_canvas(plots: &[RenderedPlot]) -> String {
    let body: String = plots.iter().map(|p| p.svg.as_str()).collect();
    format!(
        r#"<svg version="1.1" baseProfile="full" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:ev="http://www.w3.org/2001/xml-events" width="100%" height="80px">
{body}</svg>
"#
    )
}

fn legend_line(plots: &[RenderedPlot]) -> String {
    let legend: Vec<&str> = plots.iter().map(|p| p.legend.as_str()).collect();
    format!(
        r#"<small style="display:block; text-align:center;">{}</small>"#,
        legend.join(" | ")
    )
}
