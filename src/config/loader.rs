//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{CoreConfig, DEFAULT_SIDE_WIDTH};

/// Errors that can occur during config loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, unreadable path).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Configured sidebar width is not a positive pixel count.
    ///
    /// Caught at startup; letting a zero width through would silently produce
    /// an unusable expand transition on every toggle.
    #[error("Invalid side_width {value}: must be a positive pixel width")]
    InvalidSideWidth {
        /// The rejected value.
        value: u32,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/navshell/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pixel width of the expanded sidebar.
    #[serde(default)]
    pub side_width: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pixel width of the expanded sidebar.
    pub side_width: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            side_width: DEFAULT_SIDE_WIDTH,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject configurations the controllers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side_width == 0 {
            return Err(ConfigError::InvalidSideWidth {
                value: self.side_width,
            });
        }
        Ok(())
    }

    /// The slice of the resolved configuration the controllers read.
    pub fn core_config(&self) -> CoreConfig {
        CoreConfig {
            side_width: self.side_width,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/navshell/navshell.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory if
/// no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("navshell").join("navshell.log")
    } else {
        PathBuf::from("navshell.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/navshell/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("navshell").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `NAVSHELL_CONFIG` environment variable
/// 3. Default path `~/.config/navshell/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("NAVSHELL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        side_width: config.side_width.unwrap_or(defaults.side_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `NAVSHELL_SIDE_WIDTH`; a value that does not parse as a pixel
/// count is ignored rather than fatal, keeping env typos from blocking
/// startup.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("NAVSHELL_SIDE_WIDTH") {
        if let Ok(width) = raw.parse::<u32>() {
            config.side_width = width;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    side_width_override: Option<u32>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(width) = side_width_override {
        config.side_width = width;
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
