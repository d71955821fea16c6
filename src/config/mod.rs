//! Configuration management for the sparklines CLI.
//!
//! Defaults are loaded from `~/.sparklines/config.yaml`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig};
