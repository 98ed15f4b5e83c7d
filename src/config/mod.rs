// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file. The file is edited by hand; the app never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[analysis]` - Prediction endpoint, retry policy and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PAW_FEEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use paw_feel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let policy = config.analysis.retry_policy();
//! println!("{} attempts against {}", policy.max_attempts, config.analysis.endpoint);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::submission::RetryPolicy;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Prediction service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// URL the image is posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Total attempts per submission, retries included.
    #[serde(
        default = "default_max_attempts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_attempts: Option<u32>,

    /// Wait before the first retry, in milliseconds.
    #[serde(
        default = "default_initial_backoff_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_backoff_ms: Option<u64>,

    /// Multiplier applied to the wait after each retry.
    #[serde(
        default = "default_backoff_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub backoff_factor: Option<u32>,

    /// Per-attempt timeout in seconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            backoff_factor: default_backoff_factor(),
            request_timeout_secs: None,
        }
    }
}

impl AnalysisConfig {
    /// Builds the retry policy, clamping out-of-range values.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        let max_attempts = self
            .max_attempts
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
            .clamp(MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS);
        let initial_backoff_ms = self
            .initial_backoff_ms
            .unwrap_or(DEFAULT_INITIAL_BACKOFF_MS)
            .clamp(MIN_INITIAL_BACKOFF_MS, MAX_INITIAL_BACKOFF_MS);
        let backoff_factor = self
            .backoff_factor
            .unwrap_or(DEFAULT_BACKOFF_FACTOR)
            .clamp(MIN_BACKOFF_FACTOR, MAX_BACKOFF_FACTOR);

        RetryPolicy {
            max_attempts,
            initial_delay: Duration::from_millis(initial_backoff_ms),
            backoff_factor,
        }
    }

    /// Returns the clamped per-attempt timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(|secs| {
            Duration::from_secs(secs.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS))
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Prediction service settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_attempts() -> Option<u32> {
    Some(DEFAULT_MAX_ATTEMPTS)
}

fn default_initial_backoff_ms() -> Option<u64> {
    Some(DEFAULT_INITIAL_BACKOFF_MS)
}

fn default_backoff_factor() -> Option<u32> {
    Some(DEFAULT_BACKOFF_FACTOR)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn serialized_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            analysis: AnalysisConfig {
                endpoint: "http://localhost:7860/predict".to_string(),
                max_attempts: Some(5),
                initial_backoff_ms: Some(250),
                backoff_factor: Some(3),
                request_timeout_secs: Some(30),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(&config_path, toml::to_string_pretty(&config).unwrap())
            .expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[analysis\nendpoint=")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[analysis]
max_attempts = 5
",
        )
        .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.analysis.retry_policy().max_attempts, 5);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str(
            r#"
            [analysis]
            endpoint = "http://10.0.0.2/predict"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.analysis.endpoint, "http://10.0.0.2/predict");
        assert_eq!(config.analysis.max_attempts, Some(DEFAULT_MAX_ATTEMPTS));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.analysis.request_timeout().is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn default_retry_policy_matches_scanner() {
        let policy = AnalysisConfig::default().retry_policy();
        assert_eq!(policy, RetryPolicy::default());
    }

    #[test]
    fn retry_policy_clamps_out_of_range_values() {
        let analysis = AnalysisConfig {
            max_attempts: Some(0),
            initial_backoff_ms: Some(10_000_000),
            backoff_factor: Some(0),
            request_timeout_secs: Some(0),
            ..AnalysisConfig::default()
        };

        let policy = analysis.retry_policy();
        assert_eq!(policy.max_attempts, MIN_MAX_ATTEMPTS);
        assert_eq!(
            policy.initial_delay,
            Duration::from_millis(MAX_INITIAL_BACKOFF_MS)
        );
        assert_eq!(policy.backoff_factor, MIN_BACKOFF_FACTOR);
        assert_eq!(
            analysis.request_timeout(),
            Some(Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS))
        );
    }
}
