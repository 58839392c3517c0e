//! Pipeline configuration from TOML (`[pipeline]` section)

use codegen_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Fence tag the code extractor looks for (```<language>)
    pub language: String,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl FilePipelineConfig {
    pub fn validate(&self) -> Option<ConfigIssue> {
        if self.language.trim().is_empty() {
            return Some(ConfigIssue::error(
                ConfigIssueCode::EmptyLanguage,
                "pipeline.language: fence language cannot be empty",
            ));
        }
        None
    }
}
