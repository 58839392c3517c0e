//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Task cannot be empty")]
    EmptyTask,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid temperature {0}: must be between 0.0 and 2.0")]
    InvalidTemperature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_task_display() {
        assert_eq!(DomainError::EmptyTask.to_string(), "Task cannot be empty");
    }

    #[test]
    fn test_invalid_temperature_display() {
        let error = DomainError::InvalidTemperature("3.5".to_string());
        assert!(error.to_string().contains("3.5"));
    }
}
