use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::utils::io;

/// Root configuration structure for kotlinbridge.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KotlinBridgeConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How the demo report renders results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rendered results longer than this many chars are truncated.
    #[serde(default = "default_max_result_width")]
    pub max_result_width: usize,

    #[serde(default = "default_truncation_marker")]
    pub truncation_marker: String,

    #[serde(default = "default_result_arrow")]
    pub result_arrow: String,

    /// Upper bound on the `-` rule under a section title.
    #[serde(default = "default_rule_max_width")]
    pub rule_max_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_result_width: default_max_result_width(),
            truncation_marker: default_truncation_marker(),
            result_arrow: default_result_arrow(),
            rule_max_width: default_rule_max_width(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_result_width() -> usize {
    60
}

fn default_truncation_marker() -> String {
    "...".to_string()
}

fn default_result_arrow() -> String {
    "→".to_string()
}

fn default_rule_max_width() -> usize {
    50
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the display settings, falling back to built-in defaults.
pub fn load_display() -> DisplayConfig {
    load_config().display
}

/// Load the full kotlinbridge.json config, falling back to defaults on any error.
/// A file that exists but cannot be read or parsed is reported on stderr.
pub fn load_config() -> KotlinBridgeConfig {
    let path = match paths::kotlinbridge_json() {
        Ok(path) => path,
        Err(_) => return KotlinBridgeConfig::default(),
    };
    if !path.exists() {
        return KotlinBridgeConfig::default();
    }

    load_config_from(&path).unwrap_or_else(|err| {
        crate::log_status!("config", "Ignoring {}: {}", path.display(), err);
        KotlinBridgeConfig::default()
    })
}

/// Read and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<KotlinBridgeConfig> {
    let content = io::read_file(path)?;

    let config: KotlinBridgeConfig = serde_json::from_str(&content).map_err(|e| {
        Error::validation_invalid_json(e, Some("parse kotlinbridge.json".to_string()))
    })?;

    Ok(config)
}

/// Load kotlinbridge.json for an update. A missing file means built-in
/// defaults; an unreadable or invalid file is an error, so it is never
/// overwritten with defaults.
pub fn load_config_for_update() -> Result<KotlinBridgeConfig> {
    load_config_for_update_at(&paths::kotlinbridge_json()?)
}

pub fn load_config_for_update_at(path: &Path) -> Result<KotlinBridgeConfig> {
    if !path.exists() {
        return Ok(KotlinBridgeConfig::default());
    }
    load_config_from(path)
}

/// Save config to kotlinbridge.json file (creates if missing).
pub fn save_config(config: &KotlinBridgeConfig) -> Result<()> {
    save_config_to(config, &paths::kotlinbridge_json()?)
}

/// Save config to an explicit path, creating parent directories.
pub fn save_config_to(config: &KotlinBridgeConfig, path: &Path) -> Result<()> {
    io::ensure_parent_dir(path)?;

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize kotlinbridge.json".to_string()))
    })?;

    io::write_file_atomic(path, &content)
}

/// Replace the value at a JSON pointer (e.g. `/display/max_result_width`).
///
/// Only existing fields can be set, and the new value must have the field's type.
pub fn set_pointer(config: &KotlinBridgeConfig, pointer: &str, value: Value) -> Result<KotlinBridgeConfig> {
    if !pointer.starts_with('/') {
        return Err(Error::validation_invalid_argument(
            "pointer",
            "JSON pointer must start with '/'",
            Some(pointer.to_string()),
        ));
    }

    let mut json = serde_json::to_value(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize config".to_string()))
    })?;

    let slot = json.pointer_mut(pointer).ok_or_else(|| {
        Error::validation_invalid_argument(
            "pointer",
            "No such configuration field",
            Some(pointer.to_string()),
        )
        .with_hint("Run `kotlinbridge config show` to list the available fields")
    })?;
    *slot = value;

    serde_json::from_value(json)
        .map_err(|e| Error::validation_invalid_json(e, Some(format!("set {}", pointer))))
}

/// Delete kotlinbridge.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    reset_config_at(&paths::kotlinbridge_json()?)
}

/// Delete the config file at `path`. `Ok(false)` when there was nothing to delete.
pub fn reset_config_at(path: &Path) -> Result<bool> {
    io::remove_file_if_exists(path)
}

/// Check if kotlinbridge.json file exists
pub fn config_exists() -> bool {
    paths::kotlinbridge_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Get the path to kotlinbridge.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::kotlinbridge_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> KotlinBridgeConfig {
    KotlinBridgeConfig::default()
}
