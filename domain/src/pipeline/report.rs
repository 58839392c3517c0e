use super::block::RenderBlock;
use super::state::PipelineState;
use serde::{Deserialize, Serialize};

/// Everything one run produced: where it stopped and what it rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// The task text as submitted
    pub task: String,
    /// State the run ended in (`Done` or `Failed`)
    pub state: PipelineState,
    /// Blocks in render order
    pub blocks: Vec<RenderBlock>,
    /// Code after the Debugger stage, when the run reached it
    pub final_code: Option<String>,
}

impl PipelineReport {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            state: PipelineState::Idle,
            blocks: Vec::new(),
            final_code: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state.is_success()
    }

    /// Headings in render order
    pub fn headings(&self) -> Vec<&str> {
        self.blocks.iter().filter_map(RenderBlock::as_heading).collect()
    }
}
