use serde::{Deserialize, Serialize};

/// Why a run stopped before reaching `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The task was empty or whitespace only; no model was called.
    EmptyInput,
    /// The Developer stage produced no extractable code.
    EmptyCode,
}

impl FailureReason {
    /// Banner text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::EmptyInput => "Enter problem first",
            FailureReason::EmptyCode => "Model returned empty code. Try again.",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Strictly linear pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Submitted,
    Explained,
    Drafted,
    Debugged,
    Reviewed,
    UseCased,
    Done,
    Failed(FailureReason),
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Submitted => "submitted",
            PipelineState::Explained => "explained",
            PipelineState::Drafted => "drafted",
            PipelineState::Debugged => "debugged",
            PipelineState::Reviewed => "reviewed",
            PipelineState::UseCased => "use_cased",
            PipelineState::Done => "done",
            PipelineState::Failed(_) => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PipelineState::Done)
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState::Idle
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
