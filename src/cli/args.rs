use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::assembler::RenderOptions;

#[derive(Parser)]
#[command(name = "sparklines")]
#[command(about = "Render SVG sparklines and daily streak stats from markdown tables")]
#[command(long_about = "sparklines - SVG sparklines from markdown tables

Reads a markdown table whose first column holds dates (newest row first)
and renders one sparkline per numeric, percentage or mm:ss column, plus
the current and best run of consecutive days.

TABLE FORMAT:
  |!Date|!Weight|!Done|!Run|
  |12/02|50|44%|12:30|
  |11/02|42|32%|13:05|
  |10/02|48|07%|11:59|

QUICK START:
  sparklines render log.md            Print the HTML fragment
  cat log.md | sparklines render      Read the table from stdin
  sparklines stats log.md             Streaks and column summaries
  sparklines stats log.md -o json     The same as JSON")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for `stats`
    ///
    /// Use 'pretty' for coloured terminal output or 'json' for scripting.
    /// Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file to use instead of ~/.sparklines/config.yaml
    #[arg(long, global = true, env = "SPARKLINES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a table as an HTML fragment
    ///
    /// Prints the streak block, the SVG sparklines with their legend and
    /// the original table, ready to embed in a page.
    ///
    /// # Examples
    ///
    ///   sparklines render log.md
    ///   sparklines render log.md --hide-input
    ///   sparklines render --today 2024-02-13 < log.md
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Show streaks and column summaries
    ///
    /// Parses the table the same way `render` does and prints what was
    /// found: chains of consecutive days, and the kind, range and average
    /// of every column.
    ///
    /// # Examples
    ///
    ///   sparklines stats log.md
    ///   sparklines stats log.md -o json
    #[command(alias = "s")]
    Stats(InputArgs),

    /// Generate shell completions
    ///
    /// Example: sparklines completions bash > ~/.bash_completion.d/sparklines
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Where the table comes from and which day it is.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Markdown table file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,
}

/// Arguments for `render`.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Leave out the current/best chain block
    #[arg(long)]
    pub hide_chains: bool,

    /// Leave out the echoed table
    #[arg(long)]
    pub hide_input: bool,

    /// Leave out the SVG sparklines
    #[arg(long)]
    pub hide_sparklines: bool,
}

impl RenderArgs {
    /// The hide flags given on the command line.
    #[must_use]
    pub const fn flags(&self) -> RenderOptions {
        RenderOptions {
            hide_chains: self.hide_chains,
            hide_input: self.hide_input,
            hide_sparklines: self.hide_sparklines,
        }
    }
}

fn parse_iso_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
