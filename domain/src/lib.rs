//! Domain layer for multi-agent-codegen
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! Five fixed roles share one local model and differ only by their
//! instruction string:
//!
//! - **Explainer**: restates the problem in plain bullets
//! - **Developer**: writes the first draft of the code
//! - **Debugger**: fixes the draft and returns the full program
//! - **Reviewer**: replies with a status line about the code
//! - **UseCase**: lists example inputs and outputs
//!
//! ## Pipeline
//!
//! The roles run in a fixed linear sequence. Each [`Stage`] turns the
//! previous stage's text into [`RenderBlock`]s for a UI surface and, for
//! the Developer and Debugger stages, a new "current code" value.

pub mod agent;
pub mod code;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod session;

// Re-export commonly used types
pub use agent::{AgentConfig, AgentRole, AgentRoster};
pub use code::{CodeExtractor, DEFAULT_LANGUAGE, extract_code};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    model::{Model, ModelSettings},
    string::preview,
    task::Task,
};
pub use pipeline::{
    FailureReason, PipelineReport, PipelineState, RenderBlock, Stage, final_code_heading,
};
pub use session::AgentReply;
