//! Agent roles, their configurations, and the roster of all five.

use serde::{Deserialize, Serialize};

/// The five fixed agent roles, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Explainer,
    Developer,
    Debugger,
    Reviewer,
    UseCase,
}

impl AgentRole {
    /// All roles in the order the pipeline invokes them
    pub const ALL: [AgentRole; 5] = [
        AgentRole::Explainer,
        AgentRole::Developer,
        AgentRole::Debugger,
        AgentRole::Reviewer,
        AgentRole::UseCase,
    ];

    /// Display name of the agent
    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::Explainer => "Explainer",
            AgentRole::Developer => "Developer",
            AgentRole::Debugger => "Debugger",
            AgentRole::Reviewer => "Reviewer",
            AgentRole::UseCase => "UseCase",
        }
    }

    /// Built-in instruction string used as the system prompt
    pub fn default_instructions(&self) -> &'static str {
        match self {
            AgentRole::Explainer => "Explain problem simply in bullets. NO code.",
            AgentRole::Developer => "Write Python code only. Wrap inside ```python```.",
            AgentRole::Debugger => "Fix bugs and return FULL python code inside ```python```.",
            AgentRole::Reviewer => "Reply STATUS: APPROVED if code is correct.",
            AgentRole::UseCase => "Give exactly 3 real world examples: Input → Output",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One agent: a role name paired with its instruction string.
///
/// The model handle is shared by all agents and attached by the
/// application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    role: AgentRole,
    instructions: String,
}

impl AgentConfig {
    pub fn new(role: AgentRole, instructions: impl Into<String>) -> Self {
        Self {
            role,
            instructions: instructions.into(),
        }
    }

    /// Config with the role's built-in instructions
    pub fn from_role(role: AgentRole) -> Self {
        Self::new(role, role.default_instructions())
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn name(&self) -> &'static str {
        self.role.name()
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

/// The five agent configurations, created once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoster {
    pub explainer: AgentConfig,
    pub developer: AgentConfig,
    pub debugger: AgentConfig,
    pub reviewer: AgentConfig,
    pub use_case: AgentConfig,
}

impl AgentRoster {
    /// Replace one role's instructions, keeping the rest.
    ///
    /// Blank overrides are ignored so a half-filled config file cannot
    /// leave an agent without guidance.
    pub fn with_instructions(mut self, role: AgentRole, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        if instructions.trim().is_empty() {
            return self;
        }
        *self.get_mut(role) = AgentConfig::new(role, instructions);
        self
    }

    /// Look up the config for a role
    pub fn get(&self, role: AgentRole) -> &AgentConfig {
        match role {
            AgentRole::Explainer => &self.explainer,
            AgentRole::Developer => &self.developer,
            AgentRole::Debugger => &self.debugger,
            AgentRole::Reviewer => &self.reviewer,
            AgentRole::UseCase => &self.use_case,
        }
    }

    fn get_mut(&mut self, role: AgentRole) -> &mut AgentConfig {
        match role {
            AgentRole::Explainer => &mut self.explainer,
            AgentRole::Developer => &mut self.developer,
            AgentRole::Debugger => &mut self.debugger,
            AgentRole::Reviewer => &mut self.reviewer,
            AgentRole::UseCase => &mut self.use_case,
        }
    }

    /// Iterate over all five configs in pipeline order
    pub fn iter(&self) -> impl Iterator<Item = &AgentConfig> {
        AgentRole::ALL.into_iter().map(move |role| self.get(role))
    }
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self {
            explainer: AgentConfig::from_role(AgentRole::Explainer),
            developer: AgentConfig::from_role(AgentRole::Developer),
            debugger: AgentConfig::from_role(AgentRole::Debugger),
            reviewer: AgentConfig::from_role(AgentRole::Reviewer),
            use_case: AgentConfig::from_role(AgentRole::UseCase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_order() {
        let roster = AgentRoster::default();
        let names: Vec<_> = roster.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["Explainer", "Developer", "Debugger", "Reviewer", "UseCase"]
        );
    }

    #[test]
    fn test_default_instructions() {
        let roster = AgentRoster::default();
        assert!(roster.developer.instructions().contains("```python```"));
        assert!(roster.reviewer.instructions().starts_with("Reply STATUS"));
        assert!(roster.explainer.instructions().contains("NO code"));
    }

    #[test]
    fn test_with_instructions_overrides_single_role() {
        let roster = AgentRoster::default().with_instructions(AgentRole::Reviewer, "Be strict.");
        assert_eq!(roster.reviewer.instructions(), "Be strict.");
        assert_eq!(
            roster.debugger.instructions(),
            AgentRole::Debugger.default_instructions()
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let roster = AgentRoster::default().with_instructions(AgentRole::Explainer, "   ");
        assert_eq!(roster, AgentRoster::default());
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&AgentRole::UseCase).unwrap();
        assert_eq!(json, "\"use_case\"");
    }
}
