//! Progress reporting for pipeline runs

use crate::output::console::ConsoleFormatter;
use codegen_application::ProgressNotifier;
use codegen_domain::{RenderBlock, Stage};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while each agent thinks and prints each block as soon
/// as its stage is done.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    print_blocks: bool,
}

impl ProgressReporter {
    /// Spinners plus live block output (for `--output full`)
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            print_blocks: true,
        }
    }

    /// Spinners only; the caller prints the result at the end
    pub fn spinners_only() -> Self {
        Self {
            spinner: Mutex::new(None),
            print_blocks: false,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_prefix(stage: &Stage) -> String {
        format!("[{}/{}]", stage.number(), Stage::ALL.len())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_prefix(stage));
        pb.set_message(stage.activity());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        let pb = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        if !self.print_blocks {
            eprintln!(
                "{} {} {}",
                "v".green(),
                Self::stage_prefix(stage).bold(),
                stage.role()
            );
        }
    }

    fn on_block(&self, block: &RenderBlock) {
        if self.print_blocks {
            print!("{}", ConsoleFormatter::format_block(block));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_prefix_counts_from_one() {
        assert_eq!(ProgressReporter::stage_prefix(&Stage::Explain), "[1/5]");
        assert_eq!(ProgressReporter::stage_prefix(&Stage::UseCases), "[5/5]");
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::spinners_only();
        reporter.on_stage_start(&Stage::Debug);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_stage_complete(&Stage::Debug);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
