use super::state::PipelineState;
use crate::agent::AgentRole;
use serde::{Deserialize, Serialize};

/// Heading shown above the code that survived the whole run, e.g.
/// `✅ Final Python Code` for `python`
pub fn final_code_heading(language: &str) -> String {
    let mut chars = language.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("✅ Final {} Code", name)
}

/// One agent invocation in the fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Explain,
    Draft,
    Debug,
    Review,
    UseCases,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 5] = [
        Stage::Explain,
        Stage::Draft,
        Stage::Debug,
        Stage::Review,
        Stage::UseCases,
    ];

    /// 1-based position in the sequence
    pub fn number(&self) -> usize {
        match self {
            Stage::Explain => 1,
            Stage::Draft => 2,
            Stage::Debug => 3,
            Stage::Review => 4,
            Stage::UseCases => 5,
        }
    }

    /// The agent this stage invokes
    pub fn role(&self) -> AgentRole {
        match self {
            Stage::Explain => AgentRole::Explainer,
            Stage::Draft => AgentRole::Developer,
            Stage::Debug => AgentRole::Debugger,
            Stage::Review => AgentRole::Reviewer,
            Stage::UseCases => AgentRole::UseCase,
        }
    }

    /// Section heading rendered once the stage completes
    pub fn heading(&self) -> &'static str {
        match self {
            Stage::Explain => "1️⃣ Explanation",
            Stage::Draft => "2️⃣ Initial Code",
            Stage::Debug => "3️⃣ Improved Code",
            Stage::Review => "4️⃣ Review",
            Stage::UseCases => "5️⃣ Use Cases",
        }
    }

    /// Status line shown while the stage is waiting on the model
    pub fn activity(&self) -> &'static str {
        match self {
            Stage::Explain => "Understanding...",
            Stage::Draft => "Writing code...",
            Stage::Debug => "Debugging...",
            Stage::Review => "Reviewing...",
            Stage::UseCases => "Generating use cases...",
        }
    }

    /// State the pipeline is in after this stage completes
    pub fn completed_state(&self) -> PipelineState {
        match self {
            Stage::Explain => PipelineState::Explained,
            Stage::Draft => PipelineState::Drafted,
            Stage::Debug => PipelineState::Debugged,
            Stage::Review => PipelineState::Reviewed,
            Stage::UseCases => PipelineState::UseCased,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading())
    }
}
