use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::policy::RulesManager;

// =============================================================================
// Time-related constants
// =============================================================================

/// Days a release must have been public before it is announced
pub const DEFAULT_MIN_RELEASE_DAYS: u32 = 1;

/// Timeout for the marketplace lookup request in seconds
pub const LOOKUP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Marketplace
// =============================================================================

/// Default base URL for the App Store lookup API
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://itunes.apple.com";

/// Base URL for the store page opened by the Update button
pub const STORE_APP_URL: &str = "https://apps.apple.com/app";

/// Top-level configuration, read from a JSON file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NudgeConfig {
    /// Name shown in the alert message
    pub app_name: Option<String>,
    pub lookup: LookupConfig,
    pub rules: RulesManager,
    /// Overrides `minReleaseDays` on every rule when set
    pub show_alert_after_current_version_has_been_released_for_days: Option<u32>,
}

impl NudgeConfig {
    /// Rules with the global release-age override applied
    pub fn effective_rules(&self) -> RulesManager {
        match self.show_alert_after_current_version_has_been_released_for_days {
            Some(days) => self.rules.with_min_release_days(days),
            None => self.rules,
        }
    }
}

/// Marketplace lookup configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    pub bundle_id: Option<String>,
    pub app_id: Option<u64>,
    /// Two-letter storefront code, e.g. "us"
    pub country: Option<String>,
    pub base_url: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            bundle_id: None,
            app_id: None,
            country: None,
            base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read configuration from a JSON file; missing fields use defaults
pub fn load_config(path: &Path) -> Result<NudgeConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Returns the path to the data directory for version-nudge.
/// Uses $XDG_DATA_HOME/version-nudge if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-nudge,
/// or ./version-nudge if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the preferences database.
pub fn db_path() -> PathBuf {
    data_dir().join("preferences.db")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-nudge.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-nudge")
}
