//! LLM Gateway port
//!
//! Defines the interface for communicating with the local model server.

use async_trait::async_trait;
use codegen_domain::{AgentReply, Model, ModelSettings};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the model server.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session on the given model with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &ModelSettings,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Models the server has available locally
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user message and wait for the reply
    async fn send(&self, content: &str) -> Result<AgentReply, GatewayError>;
}
