//! Copyscan Configuration
//!
//! Loads and saves the scanner's configuration from `~/.copyscan/config.json`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::{default_config, ScanConfig};

/// Config file name within the copyscan directory.
const CONFIG_FILENAME: &str = "config.json";

/// Returns the copyscan home directory: `~/.copyscan`.
pub fn get_copyscan_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/root"))
        .join(".copyscan")
}

/// Returns the full path to the config file: `~/.copyscan/config.json`.
pub fn get_config_path() -> PathBuf {
    get_copyscan_dir().join(CONFIG_FILENAME)
}

/// Load the config from disk.
///
/// Merges missing fields with defaults so configs written by older versions
/// keep working. Returns `None` if the config file does not exist or cannot
/// be parsed.
pub fn load_config() -> Option<ScanConfig> {
    let config_path = get_config_path();
    if !config_path.exists() {
        return None;
    }

    let contents = fs::read_to_string(&config_path).ok()?;
    let config: ScanConfig = serde_json::from_str(&contents).ok()?;
    Some(merge_defaults(config))
}

/// Fill unset fields of `config` from `default_config()`.
pub fn merge_defaults(mut config: ScanConfig) -> ScanConfig {
    let defaults = default_config();

    if config.default_types.is_empty() {
        config.default_types = defaults.default_types;
    }
    if config.max_file_size == 0 {
        config.max_file_size = defaults.max_file_size;
    }
    if config.db_path.is_empty() {
        config.db_path = defaults.db_path;
    }
    if config.version.is_empty() {
        config.version = defaults.version;
    }

    config
}

/// Save the config to disk at `~/.copyscan/config.json`, creating the
/// directory if needed.
pub fn save_config(config: &ScanConfig) -> Result<()> {
    let dir = get_copyscan_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create copyscan directory")?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(get_config_path(), &json).context("Failed to write config file")?;

    Ok(())
}

/// Resolve a path that may start with `~` to an absolute path.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}
