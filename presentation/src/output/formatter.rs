//! Output formatter trait

use codegen_domain::{OutputFormat, PipelineReport};

/// Trait for formatting pipeline reports
pub trait OutputFormatter {
    /// Every block, in page order
    fn format(&self, report: &PipelineReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &PipelineReport) -> String;

    /// Only the final code (or the failure banner)
    fn format_code_only(&self, report: &PipelineReport) -> String;

    fn format_as(&self, report: &PipelineReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(report),
            OutputFormat::Code => self.format_code_only(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
