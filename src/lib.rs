//! sparklines - SVG sparklines and daily streaks from markdown tables
//!
//! The crate renders a markdown table such as
//!
//! ```text
//! |!Date|!Val|!Percentage|!Time|
//! |12/02|50|44%|12:30|
//! |11/02|42|32%|13:05|
//! ```
//!
//! into an HTML fragment holding one SVG sparkline per value column, a
//! legend, and the current and best run of consecutive days. [`run`] is the
//! entry point a host page calls; [`render_at`] takes the date explicitly.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SparklineError;
pub use features::assembler::{render, render_at, run, RenderOptions};
