//! Configuration module.

pub mod loader;

pub use loader::{
    default_config_path, default_log_path, load_config_file, load_config_with_precedence,
    merge_config, ConfigError, ConfigFile,
};

use std::path::PathBuf;

/// Fully resolved board configuration.
///
/// Created by merging hardcoded defaults with the optional TOML config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Fixed page size for every listing fetch.
    pub page_size: u32,

    /// Lost-drop-target policy: when `true`, a gesture that ends with no
    /// resolvable drop target moves the item back to the lane it started in
    /// instead of leaving it wherever hover put it.
    pub revert_on_lost_drop: bool,

    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            revert_on_lost_drop: false,
            log_file_path: default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_shipped_behavior() {
        let config = BoardConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(
            !config.revert_on_lost_drop,
            "default preserves the legacy leave-in-place behavior"
        );
    }

    #[test]
    fn default_config_has_a_log_path() {
        let config = BoardConfig::default();
        assert!(!config.log_file_path.as_os_str().is_empty());
    }
}
