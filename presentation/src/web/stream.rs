//! Streams a run into the page as it happens

use super::page;
use codegen_application::ProgressNotifier;
use codegen_domain::{RenderBlock, Stage};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Sends each HTML fragment to the response body as soon as the pipeline
/// reports it
pub struct PageProgress {
    tx: UnboundedSender<String>,
}

impl PageProgress {
    /// Sends the page head with `task` in the form
    pub fn start(tx: UnboundedSender<String>, task: &str) -> Self {
        let progress = Self { tx };
        progress.push(page::render_head(task));
        progress
    }

    /// Close the document; the body ends once this is dropped
    pub fn finish(self) {
        self.push(page::render_tail().to_string());
    }

    fn push(&self, fragment: String) {
        // The run keeps going if the browser went away
        if self.tx.send(fragment).is_err() {
            debug!("Page closed before the run finished");
        }
    }
}

impl ProgressNotifier for PageProgress {
    fn on_stage_start(&self, stage: &Stage) {
        self.push(page::render_activity(stage));
    }

    fn on_stage_complete(&self, stage: &Stage) {
        self.push(page::render_activity_done(stage));
    }

    fn on_block(&self, block: &RenderBlock) {
        self.push(format!("{}\n", page::render_block(block)));
    }
}
