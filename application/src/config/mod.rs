//! Application-level configuration.
//!
//! - [`PipelineConfig`]: the agent roster and the code language the
//!   pipeline extracts

pub mod pipeline_config;

pub use pipeline_config::PipelineConfig;
