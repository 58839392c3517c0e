//! Progress notification port
//!
//! Defines the interface for reporting progress while the pipeline runs.

use codegen_domain::{RenderBlock, Stage};

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinners, logs, a web page).
pub trait ProgressNotifier: Send + Sync {
    /// Called before a stage calls its agent
    fn on_stage_start(&self, stage: &Stage);

    /// Called once the agent replied (or faulted)
    fn on_stage_complete(&self, stage: &Stage);

    /// Called for every block as soon as it is ready to render
    fn on_block(&self, _block: &RenderBlock) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
