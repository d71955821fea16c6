//! Where the configuration file lives: `~/.sparklines/config.yaml`.

use std::path::PathBuf;

use crate::error::SparklineError;

/// Configuration locations.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.sparklines/`
    pub root: PathBuf,
    /// Config file: `~/.sparklines/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SparklineError> {
        let home = std::env::var("HOME")
            .map_err(|_| SparklineError::Config("HOME is not set".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".sparklines")))
    }

    /// Paths under `root` instead of the home directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Create the root directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SparklineError> {
        Ok(std::fs::create_dir_all(&self.root)?)
    }
}
