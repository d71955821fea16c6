//! Command implementations for the sparklines CLI.

use std::io::Read;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::cli::args::{InputArgs, OutputFormat, RenderArgs};
use crate::cli::completions::{
    completion_install_instructions, generate_completions, shell_from_str,
};
use crate::config::Config;
use crate::error::SparklineError;
use crate::features::assembler::render_at;
use crate::features::table::Table;
use crate::output::{format_stats, StatsReport};

/// Execute the render command
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn render(config: &Config, args: &RenderArgs) -> Result<String, SparklineError> {
    let input = read_input(args.input.file.as_deref())?;
    let options = config.render_options(args.flags());
    debug!(?options, "rendering table");
    Ok(render_at(&input, &options, today(&args.input)))
}

/// Execute the stats command
///
/// # Errors
///
/// Returns an error if the input cannot be read or JSON serialization fails.
pub fn stats(args: &InputArgs, format: OutputFormat) -> Result<String, SparklineError> {
    let input = read_input(args.file.as_deref())?;
    let today = today(args);
    let table = Table::parse(&input, today);
    format_stats(&StatsReport::build(&table, today), format)
}

/// Execute the completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str, install: bool) -> Result<String, SparklineError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        SparklineError::InvalidArgument(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

/// Execute the init command
///
/// Writes the default configuration to `path`, or to `~/.sparklines/` when
/// no path is given.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn init(path: Option<&Path>, force: bool) -> Result<String, SparklineError> {
    let config = Config::default();

    let written = match path {
        Some(path) => {
            refuse_overwrite(path, force)?;
            config.save_to_path(path)?;
            path.to_path_buf()
        },
        None => {
            let paths = crate::config::Paths::new()?;
            refuse_overwrite(&paths.config_file, force)?;
            config.save()?
        },
    };

    Ok(format!("Wrote {}", written.display()))
}

fn refuse_overwrite(path: &Path, force: bool) -> Result<(), SparklineError> {
    if path.exists() && !force {
        return Err(SparklineError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Read the table from a file, or from stdin for `None` and `-`.
fn read_input(file: Option<&Path>) -> Result<String, SparklineError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        },
    }
}

fn today(args: &InputArgs) -> NaiveDate {
    args.today.unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.md");
        std::fs::write(&path, "|12/02|50|").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "|12/02|50|");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/log.md"))).unwrap_err();
        assert!(matches!(err, SparklineError::Io(_)));
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = completions("tcsh", false).unwrap_err();
        assert!(matches!(err, SparklineError::InvalidArgument(_)));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        init(Some(&path), false).unwrap();
        assert!(path.exists());
        assert!(init(Some(&path), false).is_err());
        assert!(init(Some(&path), true).is_ok());
    }
}
