//! Solver configuration.

use crate::logging::DEFAULT_LOG_FILTER;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_solver.toml";

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for the solver binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Output format for command results.
    #[serde(default)]
    format: OutputFormat,

    /// Whether text output includes the board grid.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            format: OutputFormat::default(),
            show_board: default_show_board(),
        }
    }
}

impl SolverConfig {
    /// Reads a TOML config file; keys left out take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(bytes = content.len(), "Read solver config");

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        info!(
            log_filter = %config.log_filter,
            format = ?config.format,
            show_board = config.show_board,
            "Solver config loaded"
        );
        Ok(config)
    }

    /// Loads the explicit config file, else the default file if present,
    /// else built-in defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!(default_path = DEFAULT_CONFIG_PATH, "No solver config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns this configuration with the output format replaced.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Error loading the solver config file.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Cannot read config file {}: {}", path, source)]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid solver TOML.
    #[display("Invalid config file {}: {}", path, source)]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}
