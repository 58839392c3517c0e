//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod model;
mod output;
mod pipeline;
mod server;

pub use agents::FileAgentsConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use pipeline::FilePipelineConfig;
pub use server::{DEFAULT_HOST, DEFAULT_PORT, FileServerConfig};

use codegen_application::PipelineConfig;
use codegen_domain::{ConfigIssue, ModelSettings};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Shared model client settings
    pub model: FileModelConfig,
    /// Agent instruction overrides
    pub agents: FileAgentsConfig,
    /// Extraction settings
    pub pipeline: FilePipelineConfig,
    /// Web UI bind address
    pub server: FileServerConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.model.to_model_settings().1);
        issues.extend(self.model.validate_base_url());
        issues.extend(self.agents.to_roster().1);
        issues.extend(self.pipeline.validate());

        issues
    }

    /// Model settings, falling back to defaults for invalid values.
    ///
    /// Callers are expected to have rejected configs with errors via
    /// [`validate`](Self::validate) first.
    pub fn to_model_settings(&self) -> ModelSettings {
        self.model.to_model_settings().0.unwrap_or_default()
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let (roster, _) = self.agents.to_roster();
        let config = PipelineConfig::default().with_roster(roster);
        match self.pipeline.validate() {
            None => config.with_language(self.pipeline.language.trim()),
            Some(_) => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegen_domain::{AgentRole, ConfigIssueCode, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
id = "qwen2.5-coder"
temperature = 0.4
base_url = "http://gpu-box:11434"
timeout_secs = 60

[agents]
developer = "Write Python 3 code only. Wrap inside ```python```."

[pipeline]
language = "py"

[server]
host = "0.0.0.0"
port = 9000

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let settings = config.to_model_settings();
        assert_eq!(settings.model, Model::Qwen25Coder);
        assert_eq!(settings.temperature, 0.4);
        assert_eq!(config.model.timeout_secs, 60);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);

        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.language, "py");
        assert!(
            pipeline
                .roster
                .get(AgentRole::Developer)
                .instructions()
                .starts_with("Write Python 3")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[model]
id = "codellama"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.to_model_settings().model, Model::CodeLlama);
        // Defaults should apply
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.base_url, "http://localhost:11434");
        assert_eq!(config.pipeline.language, "python");
        assert_eq!(config.server.port, 8501);
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.id, "tinyllama");
        assert_eq!(config.model.timeout_secs, 300);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.to_pipeline_config(), PipelineConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[model]
id = ""
temperature = -1.0
base_url = "ollama"

[agents]
debugger = ""

[pipeline]
language = " "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| &i.code).collect();

        assert_eq!(issues.len(), 5);
        assert!(codes.contains(&&ConfigIssueCode::EmptyModelId));
        assert!(codes.contains(&&ConfigIssueCode::EmptyLanguage));
        assert!(codes.contains(&&ConfigIssueCode::EmptyInstructions {
            agent: "debugger".to_string()
        }));
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = FileConfig {
            pipeline: FilePipelineConfig {
                language: String::new(),
            },
            model: FileModelConfig {
                temperature: 9.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.to_model_settings(), ModelSettings::default());
        assert_eq!(config.to_pipeline_config().language, "python");
    }
}
