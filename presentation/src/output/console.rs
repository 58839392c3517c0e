//! Console output formatter for pipeline reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use codegen_domain::{AgentRoster, Model, PipelineReport, RenderBlock, Stage};

/// Formats pipeline reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &PipelineReport) -> String {
        let mut output = Self::format_preamble(&report.task);

        for block in &report.blocks {
            output.push_str(&Self::format_block(block));
        }

        output.push_str(&Self::format_footer());

        output
    }

    /// Title banner and task line printed before any block
    pub fn format_preamble(task: &str) -> String {
        format!(
            "{}\n{} {}\n",
            Self::header("🤖 Multi-Agent Python Generator"),
            "Task:".cyan().bold(),
            task
        )
    }

    pub fn format_footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Render one block the way the page shows it
    pub fn format_block(block: &RenderBlock) -> String {
        match block {
            RenderBlock::Heading { text } => Self::section_header(text),
            RenderBlock::Markdown { text } => format!("{}\n", text),
            RenderBlock::Code { language, code } => {
                let fence = format!("```{}", language);
                format!(
                    "{}\n{}\n{}\n",
                    fence.dimmed(),
                    code.yellow(),
                    "```".dimmed()
                )
            }
            RenderBlock::Success { text } => format!("{}\n", text.green().bold()),
            RenderBlock::Error { text } => format!("{} {}\n", "x".red().bold(), text.red()),
        }
    }

    /// Format as JSON
    pub fn format_json(report: &PipelineReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the final code, uncolored, so it can be redirected to a file.
    /// A failed run prints its banner instead.
    pub fn format_code_only(report: &PipelineReport) -> String {
        match &report.final_code {
            Some(code) => format!("{}\n", code),
            None => report
                .blocks
                .iter()
                .find_map(|block| match block {
                    RenderBlock::Error { text } => Some(format!("{}\n", text)),
                    _ => None,
                })
                .unwrap_or_default(),
        }
    }

    /// The five agents and their instructions, in pipeline order
    pub fn format_agents(roster: &AgentRoster) -> String {
        let mut output = String::new();
        for (stage, agent) in Stage::ALL.iter().zip(roster.iter()) {
            output.push_str(&format!(
                "{} {}\n    {}\n",
                format!("{}.", stage.number()).dimmed(),
                agent.name().yellow().bold(),
                agent.instructions()
            ));
        }
        output
    }

    /// Models the server has, marking the configured one
    pub fn format_models(models: &[Model], current: &Model) -> String {
        if models.is_empty() {
            return format!("{}\n", "No models installed. Try `ollama pull tinyllama`.".yellow());
        }
        models
            .iter()
            .map(|model| {
                let mark = if model == current { "*".green().bold() } else { " ".normal() };
                let tag = if model.is_code_model() { " (code)".dimmed() } else { "".normal() };
                format!("{} {}{}\n", mark, model, tag)
            })
            .collect()
    }

    /// Turn colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &PipelineReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &PipelineReport) -> String {
        Self::format_json(report)
    }

    fn format_code_only(&self, report: &PipelineReport) -> String {
        Self::format_code_only(report)
    }
}
