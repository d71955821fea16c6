//! Command line harness around the sparkline renderer.

pub mod args;
pub mod commands;
pub mod completions;
