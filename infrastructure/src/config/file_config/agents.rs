//! Agent instruction overrides from TOML (`[agents]` section)

use codegen_domain::{AgentRole, AgentRoster, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Optional per-agent instruction overrides
///
/// Unset agents keep their built-in instructions.
///
/// # Example
///
/// ```toml
/// [agents]
/// developer = "Write Python 3.12 code only. Wrap inside ```python```."
/// reviewer = "Reply STATUS: APPROVED if code is correct, else list problems."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    pub explainer: Option<String>,
    pub developer: Option<String>,
    pub debugger: Option<String>,
    pub reviewer: Option<String>,
    pub use_case: Option<String>,
}

impl FileAgentsConfig {
    fn override_for(&self, role: AgentRole) -> Option<&String> {
        match role {
            AgentRole::Explainer => self.explainer.as_ref(),
            AgentRole::Developer => self.developer.as_ref(),
            AgentRole::Debugger => self.debugger.as_ref(),
            AgentRole::Reviewer => self.reviewer.as_ref(),
            AgentRole::UseCase => self.use_case.as_ref(),
        }
    }

    /// Build the roster, warning about blank overrides (which are ignored)
    pub fn to_roster(&self) -> (AgentRoster, Vec<ConfigIssue>) {
        let mut roster = AgentRoster::default();
        let mut issues = Vec::new();

        for role in AgentRole::ALL {
            match self.override_for(role) {
                None => {}
                Some(s) if s.trim().is_empty() => {
                    let key = config_key(role);
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::EmptyInstructions {
                            agent: key.to_string(),
                        },
                        format!("agents.{}: empty, using the built-in instructions", key),
                    ));
                }
                Some(s) => roster = roster.with_instructions(role, s.as_str()),
            }
        }

        (roster, issues)
    }
}

/// TOML key for a role
fn config_key(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Explainer => "explainer",
        AgentRole::Developer => "developer",
        AgentRole::Debugger => "debugger",
        AgentRole::Reviewer => "reviewer",
        AgentRole::UseCase => "use_case",
    }
}
