//! Configuration issues detected while validating user settings.
//!
//! Validation never aborts on the first problem: the loader collects every
//! issue, prints warnings, and refuses to start only when an
//! [`Severity::Error`] is present.
//!
//! # Examples
//!
//! ```
//! use codegen_domain::config::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issues = vec![ConfigIssue::warning(
//!     ConfigIssueCode::EmptyInstructions { agent: "reviewer".to_string() },
//!     "agents.reviewer is empty, using the built-in instructions",
//! )];
//! assert!(!ConfigIssue::has_errors(&issues));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `model.id` is empty.
    EmptyModelId,
    /// `model.temperature` is outside `0.0..=2.0`.
    TemperatureOutOfRange { value: String },
    /// An `[agents]` override is blank.
    EmptyInstructions { agent: String },
    /// `pipeline.language` is empty.
    EmptyLanguage,
    /// `model.base_url` is not an http(s) URL.
    InvalidBaseUrl { value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Whether any issue in the list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let warning = ConfigIssue::warning(ConfigIssueCode::EmptyLanguage, "w");
        let error = ConfigIssue::error(ConfigIssueCode::EmptyModelId, "e");
        assert!(!ConfigIssue::has_errors(&[warning.clone()]));
        assert!(ConfigIssue::has_errors(&[warning, error]));
        assert!(!ConfigIssue::has_errors(&[]));
    }

    #[test]
    fn test_display_prefixes_severity() {
        let issue = ConfigIssue::error(ConfigIssueCode::EmptyModelId, "model.id cannot be empty");
        assert_eq!(issue.to_string(), "error: model.id cannot be empty");
    }
}
