//! Runtime configuration read from environment variables.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Configuration for one run of the terminal game.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Seed for the tile-spawn RNG.
    pub seed: u64,
    /// Directory holding `tui-2048.log`; `None` means the platform default.
    pub log_dir: Option<PathBuf>,
    pub logging_enabled: bool,
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TUI_2048_SEED` - RNG seed (default: derived from the clock)
    /// - `TUI_2048_LOG_DIR` - log directory (default: platform cache dir)
    /// - `TUI_2048_LOG_DISABLED` - `1` or `true` disables file logging
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match non_empty(lookup("TUI_2048_SEED")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TUI_2048_SEED",
                value: raw.clone(),
                expected: "an unsigned 64-bit integer",
            })?,
            None => clock_seed(),
        };

        let log_dir = non_empty(lookup("TUI_2048_LOG_DIR")).map(PathBuf::from);

        let logging_enabled = match non_empty(lookup("TUI_2048_LOG_DISABLED")) {
            Some(raw) => match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" => false,
                "0" | "false" | "no" => true,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "TUI_2048_LOG_DISABLED",
                        value: raw,
                        expected: "a boolean",
                    })
                }
            },
            None => true,
        };

        Ok(Self {
            seed,
            log_dir,
            logging_enabled,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
