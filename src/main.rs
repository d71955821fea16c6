use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sparklines::cli::args::{Cli, Commands};
use sparklines::cli::commands;
use sparklines::config::Config;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the rendered output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Render(args) => {
            let config = load_config(cli.config.as_deref())?;
            commands::render(&config, &args)?
        },
        Commands::Stats(args) => {
            let config = load_config(cli.config.as_deref())?;
            let format = cli.output.unwrap_or(config.general.default_output);
            commands::stats(&args, format)?
        },
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
        Commands::Init { force } => commands::init(cli.config.as_deref(), force)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(Config::load, Config::load_from_path)
        .context("failed to load configuration")
}
