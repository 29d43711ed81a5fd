//! Generator configuration file
//!
//! An optional `tsclient-gen.toml` beside the input schema (or any file passed
//! with `--config`) supplies defaults for the generated client:
//!
//! ```toml
//! api_name = "NakamaApi"
//! base_path = "https://api.example.com"
//! timeout_ms = 10000
//! ```
//!
//! Command-line flags override the file, and the file overrides built-in defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::generator::ClientSettings;

/// File name looked up beside the input schema.
pub const CONFIG_FILE_NAME: &str = "tsclient-gen.toml";

/// Settings read from `tsclient-gen.toml`; unset keys keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the exported factory function
    #[serde(default)]
    pub api_name: Option<String>,
    /// Fallback base URL of the generated client
    #[serde(default)]
    pub base_path: Option<String>,
    /// Fallback request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl GeneratorConfig {
    /// Overlay `other` on top of `self`; keys set in `other` win.
    pub fn merged_with(self, other: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            api_name: other.api_name.or(self.api_name),
            base_path: other.base_path.or(self.base_path),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    /// Fill unset keys from [`ClientSettings::default`].
    pub fn into_settings(self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            api_name: self.api_name.unwrap_or(defaults.api_name),
            base_path: self.base_path.unwrap_or(defaults.base_path),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        }
    }
}

/// Load a configuration file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid TOML for [`GeneratorConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<GeneratorConfig> {
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    debug!(path = %config_path.display(), ?config, "Loaded generator config");
    Ok(config)
}

/// Look for `tsclient-gen.toml` in the same directory as the input schema.
pub fn auto_detect_config_path(input_path: &Path) -> Option<PathBuf> {
    let input_dir = match input_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let config_path = input_dir.join(CONFIG_FILE_NAME);
    config_path.is_file().then_some(config_path)
}

/// Resolve the configuration to apply for `input_path`.
///
/// Priority:
/// 1. Explicitly provided path (via CLI); it must exist
/// 2. Auto-detected alongside the input
/// 3. Empty configuration
///
/// # Errors
///
/// Fails if the chosen file cannot be read or parsed.
pub fn resolve_config(
    explicit_path: Option<&Path>,
    input_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    match explicit_path
        .map(Path::to_path_buf)
        .or_else(|| auto_detect_config_path(input_path))
    {
        Some(path) => load_config(&path),
        None => Ok(GeneratorConfig::default()),
    }
}
