//! Configuration file loading for the console driver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Driver settings, read from `chess.toml` when present.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Print the board diagram after every accepted move.
    #[serde(default)]
    pub show_board: bool,
    /// Print a banner when a new game starts. Defaults to true.
    #[serde(default = "default_announce_start")]
    pub announce_start: bool,
}

fn default_announce_start() -> bool {
    true
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            show_board: false,
            announce_start: default_announce_start(),
        }
    }
}

impl DriverConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path: `chess.toml` in the current
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(DriverConfig::parse("").unwrap(), DriverConfig::default());
    }

    #[test]
    fn parse_all_keys() {
        let config = DriverConfig::parse("show_board = true\nannounce_start = false\n").unwrap();
        assert!(config.show_board);
        assert!(!config.announce_start);
    }

    #[test]
    fn invalid_toml() {
        let err = DriverConfig::parse("show_board = maybe").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = DriverConfig::load(Path::new("does-not-exist/chess.toml")).unwrap();
        assert_eq!(config, DriverConfig::default());
    }
}
