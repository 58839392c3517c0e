//! Agent domain
//!
//! The five fixed roles and their instruction strings. Agents carry no
//! behavior of their own; the application layer pairs each [`AgentConfig`]
//! with the shared model client.

pub mod roster;

pub use roster::{AgentConfig, AgentRole, AgentRoster};
