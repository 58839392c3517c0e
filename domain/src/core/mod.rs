//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: local models the agents can run against
//! - [`task::Task`]: a validated problem description submitted by the user
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
pub mod task;
