//! Error types for the command line harness.
//!
//! Rendering itself never fails; these errors come from reading input,
//! loading configuration and serializing reports.

use thiserror::Error;

/// Errors returned by CLI commands.
#[derive(Debug, Error)]
pub enum SparklineError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be serialized.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command line argument was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SparklineError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad yaml");

        let err = SparklineError::InvalidArgument("shell".to_string());
        assert_eq!(err.to_string(), "Invalid argument: shell");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.md");
        let err: SparklineError = io.into();
        assert!(matches!(err, SparklineError::Io(_)));
        assert!(err.to_string().contains("missing.md"));
    }
}
