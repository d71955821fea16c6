//! Sparkline rendering for numeric, percentage and time columns.

pub mod visualization;

pub use visualization::{render_plot, render_plots, RenderedPlot, PALETTE};
