//! Generate Code use case
//!
//! Runs the five agents in their fixed order:
//!
//! ```text
//! task ─▶ Explainer ─▶ (display)
//! task ─▶ Developer ─▶ extract ─▶ code   (empty → stop)
//! code ─▶ Debugger  ─▶ extract ─▶ code
//! code ─▶ Reviewer  ─▶ (display)
//! code ─▶ UseCase   ─▶ (display)
//! ```
//!
//! The current code is threaded through the stages by value. Agent faults
//! arrive as `"ERROR: ..."` text and are treated like any other reply.

use crate::config::PipelineConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::agent_runner::AgentRunner;
use codegen_domain::{
    CodeExtractor, FailureReason, PipelineReport, PipelineState, RenderBlock, Stage, Task,
    final_code_heading, preview,
};
use tracing::{info, warn};

/// Use case for one Generate run
pub struct GenerateCodeUseCase {
    runner: AgentRunner,
    config: PipelineConfig,
    extractor: CodeExtractor,
}

impl GenerateCodeUseCase {
    pub fn new(runner: AgentRunner, config: PipelineConfig) -> Self {
        let extractor = CodeExtractor::new(&config.language);
        Self {
            runner,
            config,
            extractor,
        }
    }

    pub fn runner(&self) -> &AgentRunner {
        &self.runner
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, task: &str) -> PipelineReport {
        self.execute_with_progress(task, &NoProgress).await
    }

    /// Execute the use case, reporting every stage and block as it happens
    pub async fn execute_with_progress(
        &self,
        task: &str,
        progress: &dyn ProgressNotifier,
    ) -> PipelineReport {
        let mut report = PipelineReport::new(task);

        let task = match Task::try_new(task) {
            Ok(task) => task,
            Err(_) => {
                warn!("Rejected empty task");
                return Self::fail(report, FailureReason::EmptyInput, progress);
            }
        };
        report.state = PipelineState::Submitted;
        info!("Starting pipeline: {}", preview(task.content(), 100));

        let mut code = String::new();
        for stage in Stage::ALL {
            progress.on_stage_start(&stage);
            let outcome = self.run_stage(stage, &task, code).await;
            progress.on_stage_complete(&stage);

            match outcome {
                Ok((next_code, blocks)) => {
                    code = next_code;
                    for block in blocks {
                        Self::emit(&mut report, progress, block);
                    }
                    report.state = stage.completed_state();
                    info!("{} complete", stage.role());
                }
                Err(reason) => {
                    warn!("Pipeline stopped after {}: {}", stage.role(), reason);
                    return Self::fail(report, reason, progress);
                }
            }
        }

        let heading = final_code_heading(&self.config.language);
        Self::emit(&mut report, progress, RenderBlock::heading(heading));
        Self::emit(
            &mut report,
            progress,
            RenderBlock::code(&self.config.language, code.clone()),
        );
        report.final_code = Some(code);
        report.state = PipelineState::Done;
        info!("Pipeline done");

        report
    }

    /// One step of the fold: consumes the current code and returns the
    /// next one along with the blocks to render.
    async fn run_stage(
        &self,
        stage: Stage,
        task: &Task,
        code: String,
    ) -> Result<(String, Vec<RenderBlock>), FailureReason> {
        let agent = self.config.roster.get(stage.role());
        let language = &self.config.language;

        match stage {
            Stage::Explain => {
                let explanation = self.runner.run(agent, task.content()).await;
                Ok((
                    code,
                    vec![
                        RenderBlock::heading(stage.heading()),
                        RenderBlock::markdown(explanation),
                    ],
                ))
            }
            Stage::Draft => {
                let raw = self.runner.run(agent, task.content()).await;
                let draft = self.extractor.extract(Some(&raw));
                if draft.is_empty() {
                    return Err(FailureReason::EmptyCode);
                }
                Ok((
                    draft.clone(),
                    vec![
                        RenderBlock::heading(stage.heading()),
                        RenderBlock::code(language, draft),
                    ],
                ))
            }
            Stage::Debug => {
                let improved = self.runner.run(agent, &code).await;
                let fixed = self.extractor.extract(Some(&improved));
                Ok((
                    fixed.clone(),
                    vec![
                        RenderBlock::heading(stage.heading()),
                        RenderBlock::code(language, fixed),
                    ],
                ))
            }
            Stage::Review => {
                let review = self.runner.run(agent, &code).await;
                Ok((
                    code,
                    vec![
                        RenderBlock::heading(stage.heading()),
                        RenderBlock::success(review),
                    ],
                ))
            }
            Stage::UseCases => {
                let cases = self.runner.run(agent, &code).await;
                Ok((
                    code,
                    vec![
                        RenderBlock::heading(stage.heading()),
                        RenderBlock::markdown(cases),
                    ],
                ))
            }
        }
    }

    fn emit(report: &mut PipelineReport, progress: &dyn ProgressNotifier, block: RenderBlock) {
        progress.on_block(&block);
        report.blocks.push(block);
    }

    fn fail(
        mut report: PipelineReport,
        reason: FailureReason,
        progress: &dyn ProgressNotifier,
    ) -> PipelineReport {
        Self::emit(&mut report, progress, RenderBlock::error(reason.message()));
        report.state = PipelineState::Failed(reason);
        report
    }
}
