// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default language and log level
//! - `[backend]` - Hosted database URL and public key
//! - `[contact]` - Chat handoff target
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `DEVFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use devfolio::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.default_language = Some("ar".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale used when nothing valid is persisted (e.g., "en", "ar").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Log filter directive (overridden by `RUST_LOG`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: Some(DEFAULT_LOCALE.code().to_string()),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

/// Hosted backend connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anon) API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,
}

impl BackendConfig {
    /// Returns `(url, key)` when both are set and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.anon_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Some((url, key)),
            _ => None,
        }
    }
}

/// Contact handoff settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// WhatsApp number in international format, digits only.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
        }
    }
}

fn default_whatsapp_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// The configured default locale, or [`DEFAULT_LOCALE`] if unset or unsupported.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.general
            .default_language
            .as_deref()
            .and_then(|code| code.parse().ok())
            .unwrap_or(DEFAULT_LOCALE)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.general.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the translation key of a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(Error::Config(_)) => (
            Config::default(),
            Some("notification.config.parseError".to_string()),
        ),
        Err(_) => (
            Config::default(),
            Some("notification.config.readError".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                default_language: Some("ar".to_string()),
                log_level: Some("debug".to_string()),
            },
            backend: BackendConfig {
                url: Some("https://example.supabase.co".to_string()),
                anon_key: Some("anon".to_string()),
            },
            contact: ContactConfig {
                whatsapp_number: "15550001111".to_string(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\ndefault_language = \"ar\"\n").unwrap();
        assert_eq!(config.default_locale(), Locale::Ar);
        assert_eq!(config.contact.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert!(config.backend.credentials().is_none());
    }

    #[test]
    fn invalid_toml_yields_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification.config.parseError"));
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn unsupported_default_language_falls_back() {
        let mut config = Config::default();
        config.general.default_language = Some("fr".to_string());
        assert_eq!(config.default_locale(), DEFAULT_LOCALE);
        config.general.default_language = None;
        assert_eq!(config.default_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn backend_credentials_require_both_values() {
        let mut backend = BackendConfig {
            url: Some("https://example.supabase.co".to_string()),
            anon_key: Some(String::new()),
        };
        assert!(backend.credentials().is_none());
        backend.anon_key = Some("key".to_string());
        assert_eq!(
            backend.credentials(),
            Some(("https://example.supabase.co", "key"))
        );
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
