//! Pipeline configuration: what the use case needs besides the model.

use codegen_domain::{AgentRole, AgentRoster, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

/// Static configuration for [`GenerateCodeUseCase`](crate::GenerateCodeUseCase).
///
/// Built once at startup from the config file and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Agent instructions for the five stages
    pub roster: AgentRoster,
    /// Language tag of the fenced block the extractor looks for
    pub language: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            roster: AgentRoster::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl PipelineConfig {
    // ==================== Builder Methods ====================

    pub fn with_roster(mut self, roster: AgentRoster) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_instructions(mut self, role: AgentRole, instructions: impl Into<String>) -> Self {
        self.roster = self.roster.with_instructions(role, instructions);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_python_with_builtin_roster() {
        let config = PipelineConfig::default();
        assert_eq!(config.language, "python");
        assert_eq!(config.roster, AgentRoster::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = PipelineConfig::default()
            .with_language("rust")
            .with_instructions(AgentRole::Developer, "Write Rust only.");
        assert_eq!(config.language, "rust");
        assert_eq!(config.roster.developer.instructions(), "Write Rust only.");
    }
}
