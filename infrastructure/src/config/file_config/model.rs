//! Model client configuration from TOML (`[model]` section)

use crate::ollama::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use codegen_domain::core::model::DEFAULT_TEMPERATURE;
use codegen_domain::{ConfigIssue, ConfigIssueCode, Model, ModelSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model client configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// id = "qwen2.5-coder"
/// temperature = 0.2
/// base_url = "http://localhost:11434"
/// timeout_secs = 300
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Ollama model tag shared by every agent
    pub id: String,
    /// Sampling temperature shared by every agent
    pub temperature: f32,
    /// Ollama server root
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            id: Model::default().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileModelConfig {
    /// Parse into [`ModelSettings`], collecting issues instead of failing fast.
    pub fn to_model_settings(&self) -> (Option<ModelSettings>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelId,
                "model.id: model name cannot be empty",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange {
                    value: self.temperature.to_string(),
                },
                format!(
                    "model.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }
        if !issues.is_empty() {
            return (None, issues);
        }

        // Model::from_str is infallible; unknown names become Custom(...)
        let model: Model = self.id.trim().parse().unwrap_or_default();
        (ModelSettings::new(model, self.temperature).ok(), issues)
    }

    /// Check that `base_url` is an http(s) URL
    pub fn validate_base_url(&self) -> Option<ConfigIssue> {
        let ok = reqwest::Url::parse(&self.base_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if ok {
            return None;
        }
        Some(ConfigIssue::error(
            ConfigIssueCode::InvalidBaseUrl {
                value: self.base_url.clone(),
            },
            format!("model.base_url: '{}' is not an http(s) URL", self.base_url),
        ))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let (settings, issues) = FileModelConfig::default().to_model_settings();
        assert!(issues.is_empty());
        assert_eq!(settings, Some(ModelSettings::default()));
    }

    #[test]
    fn test_empty_id_is_error() {
        let config = FileModelConfig {
            id: "  ".to_string(),
            ..Default::default()
        };
        let (settings, issues) = config.to_model_settings();
        assert!(settings.is_none());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyModelId);
    }

    #[test]
    fn test_temperature_out_of_range_is_error() {
        let config = FileModelConfig {
            temperature: 3.5,
            ..Default::default()
        };
        let (settings, issues) = config.to_model_settings();
        assert!(settings.is_none());
        assert!(ConfigIssue::has_errors(&issues));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::TemperatureOutOfRange { .. }
        ));
    }

    #[test]
    fn test_custom_model_id() {
        let config = FileModelConfig {
            id: "llama3.1:70b".to_string(),
            ..Default::default()
        };
        let (settings, _) = config.to_model_settings();
        assert_eq!(
            settings.unwrap().model,
            Model::Custom("llama3.1:70b".to_string())
        );
    }

    #[test]
    fn test_base_url_validation() {
        assert!(FileModelConfig::default().validate_base_url().is_none());
        let config = FileModelConfig {
            base_url: "localhost:11434".to_string(),
            ..Default::default()
        };
        assert!(config.validate_base_url().is_some());
    }
}
