//! Ollama adapter
//!
//! Implements the [`LlmGateway`](codegen_application::LlmGateway) port on
//! top of a local Ollama server's REST API.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::OllamaError;
pub use gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, OllamaGateway};
pub use session::OllamaSession;
