//! Infrastructure layer for multi-agent-codegen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAgentsConfig, FileConfig, FileModelConfig, FileOutputConfig,
    FilePipelineConfig, FileServerConfig,
};
pub use ollama::{OllamaError, OllamaGateway, OllamaSession};
