//! Task value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A programming problem submitted for one pipeline run (Value Object)
///
/// Immutable once created. Construction fails for empty or
/// whitespace-only text, which is the pipeline's first guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Task {
    content: String,
}

impl Task {
    /// Try to create a task, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyTask)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the task content as submitted
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Task {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Task::try_new(value)
    }
}

impl From<Task> for String {
    fn from(task: Task) -> Self {
        task.content
    }
}
