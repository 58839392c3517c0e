//! Error types for the Ollama adapter

use codegen_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to the Ollama HTTP API
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Cannot reach Ollama at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl OllamaError {
    /// Classify a transport-level reqwest failure
    pub(crate) fn from_transport(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OllamaError::Timeout
        } else if e.is_connect() {
            OllamaError::Unreachable {
                url: url.to_string(),
                message: e.to_string(),
            }
        } else {
            OllamaError::Http(e)
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Timeout => GatewayError::Timeout,
            OllamaError::Unreachable { .. } => GatewayError::ConnectionError(e.to_string()),
            // Ollama answers 404 for a model that has not been pulled
            OllamaError::Status { status: 404, body } => GatewayError::ModelNotAvailable(body),
            OllamaError::Status { .. } | OllamaError::Http(_) => {
                GatewayError::RequestFailed(e.to_string())
            }
            OllamaError::ParseError { .. } => GatewayError::InvalidResponse(e.to_string()),
            OllamaError::InvalidBaseUrl { .. } | OllamaError::ClientBuild(_) => {
                GatewayError::Other(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_maps_to_model_not_available() {
        let err: GatewayError = OllamaError::Status {
            status: 404,
            body: "model 'nope' not found".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::ModelNotAvailable(ref m) if m.contains("nope")));
    }

    #[test]
    fn test_server_error_maps_to_request_failed() {
        let err: GatewayError = OllamaError::Status {
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Request failed: Ollama returned 500: boom");
    }

    #[test]
    fn test_timeout_maps_to_timeout() {
        let err: GatewayError = OllamaError::Timeout.into();
        assert!(matches!(err, GatewayError::Timeout));
    }
}
