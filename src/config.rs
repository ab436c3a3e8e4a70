//! Field configuration loading.
//!
//! Reads thresholds and styling from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strength::StrengthThresholds;
use crate::style::FieldStyle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings injected into a `PasswordField` at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub thresholds: StrengthThresholds,
    pub style: FieldStyle,
}

impl FieldConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate().map_err(ConfigError::Invalid)?;

        let indicator = &self.style.indicator;
        if indicator.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "indicator.frame_interval_ms must be greater than 0".to_string(),
            ));
        }
        if !(indicator.pulse_scale.is_finite() && indicator.pulse_scale > 0.0) {
            return Err(ConfigError::Invalid(
                "indicator.pulse_scale must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Returns the config file path.
///
/// Priority:
/// 1. Environment variable `PWD_FIELD_CONFIG_PATH`
/// 2. Default path `./assets/pwd-field.toml`
pub fn get_config_path() -> PathBuf {
    std::env::var("PWD_FIELD_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/pwd-field.toml"))
}

/// Loads the configuration from the path given by [`get_config_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is not valid TOML or holds invalid values
pub fn load_config() -> Result<FieldConfig, ConfigError> {
    load_config_from_path(get_config_path())
}

/// Loads the configuration from a specific file path.
///
/// # Example
///
/// ```rust,no_run
/// let config = pwd_field::load_config_from_path("/etc/myapp/pwd-field.toml")?;
/// let field = pwd_field::PasswordField::new(config);
/// # Ok::<(), pwd_field::ConfigError>(())
/// ```
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<FieldConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Config load FAILED: FileNotFound {:?}", path);
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config = FieldConfig::from_toml_str(&content).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Config load FAILED for {:?}: {}", path, _e);
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Config loaded from {:?}: medium_min={}, strong_min={}",
        path,
        config.thresholds.medium_min,
        config.thresholds.strong_min
    );

    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// Read, parse and validation errors are still returned.
pub fn load_config_or_default() -> Result<FieldConfig, ConfigError> {
    match load_config() {
        Err(ConfigError::FileNotFound(_path)) => {
            #[cfg(feature = "tracing")]
            tracing::info!("No config at {:?}, using defaults", _path);
            Ok(FieldConfig::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", content).expect("Failed to write");
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_config_path_default() {
        remove_env("PWD_FIELD_CONFIG_PATH");

        let path = get_config_path();
        assert_eq!(path, PathBuf::from("./assets/pwd-field.toml"));
    }

    #[test]
    #[serial]
    fn test_get_config_path_from_env() {
        let custom_path = "/custom/path/pwd-field.toml";
        set_env("PWD_FIELD_CONFIG_PATH", custom_path);

        let path = get_config_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_FIELD_CONFIG_PATH");
    }

    #[test]
    #[serial]
    fn test_load_config_file_not_found() {
        set_env("PWD_FIELD_CONFIG_PATH", "/nonexistent/path/pwd-field.toml");

        let result = load_config();
        match result {
            Err(ConfigError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env("PWD_FIELD_CONFIG_PATH");
    }

    #[test]
    #[serial]
    fn test_load_config_or_default_when_missing() {
        set_env("PWD_FIELD_CONFIG_PATH", "/nonexistent/path/pwd-field.toml");

        let config = load_config_or_default().expect("defaults expected");
        assert_eq!(config, FieldConfig::default());

        remove_env("PWD_FIELD_CONFIG_PATH");
    }

    #[test]
    #[serial]
    fn test_load_config_or_default_propagates_parse_error() {
        let temp_file = config_file("thresholds = [");
        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_FIELD_CONFIG_PATH", path);

        assert!(matches!(load_config_or_default(), Err(ConfigError::Parse(_))));

        remove_env("PWD_FIELD_CONFIG_PATH");
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_file = config_file("");
        let config = load_config_from_path(temp_file.path()).expect("Failed to load");
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let temp_file = config_file(
            r#"
[thresholds]
medium_min = 8

[style]
title = "NEW PASSWORD"

[style.indicator]
transition_ms = 500

[style.indicator.weak_color]
hue = 0.0
saturation = 1.0
brightness = 1.0

[style.indicator.labels]
strong = "Great"
"#,
        );

        let config = load_config_from_path(temp_file.path()).expect("Failed to load");
        assert_eq!(config.thresholds.medium_min, 8);
        assert_eq!(config.thresholds.strong_min, 20);
        assert_eq!(config.style.title, "NEW PASSWORD");
        assert_eq!(config.style.text_field_height, 50.0);
        assert_eq!(config.style.indicator.transition_ms, 500);
        assert_eq!(config.style.indicator.weak_color.alpha, 1.0);
        assert_eq!(config.style.indicator.labels.strong, "Great");
        assert_eq!(config.style.indicator.labels.weak, "Too weak");
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let temp_file = config_file(
            r#"
[thresholds]
medium_min = 20
strong_min = 10
"#,
        );

        let result = load_config_from_path(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_nan_pulse_scale_rejected() {
        let result = FieldConfig::from_toml_str("[style.indicator]\npulse_scale = nan\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = FieldConfig::from_toml_str("[style.indicator]\npulse_scale = inf\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_frame_interval_rejected() {
        let result = FieldConfig::from_toml_str("[style.indicator]\nframe_interval_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = FieldConfig::from_toml_str("[thresholds\nmedium_min = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
