//! Configuration file loading with precedence handling.

use crate::config::BoardConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, disappearing file).
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
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/triboard/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Page size for listing fetches.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Lost-drop-target policy (see [`BoardConfig::revert_on_lost_drop`]).
    #[serde(default)]
    pub revert_on_lost_drop: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/triboard/triboard.log` on Unix-like systems, the
/// platform state directory elsewhere. If the state directory cannot be
/// determined, falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("triboard").join("triboard.log")
    } else {
        PathBuf::from("triboard.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/triboard/config.toml` on Unix, appropriate path on
/// other platforms. `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("triboard").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
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
/// 1. Explicit `config_path` argument
/// 2. `TRIBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/triboard/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TRIBOARD_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create the resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> BoardConfig {
    let defaults = BoardConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    BoardConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        revert_on_lost_drop: config
            .revert_on_lost_drop
            .unwrap_or(defaults.revert_on_lost_drop),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

// ===== Tests =====
