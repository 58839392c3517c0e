//! Ollama LLM Gateway implementation

use crate::ollama::error::{OllamaError, Result};
use crate::ollama::protocol::TagsResponse;
use crate::ollama::session::OllamaSession;
use async_trait::async_trait;
use codegen_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use codegen_domain::{Model, ModelSettings};
use std::time::Duration;
use tracing::{debug, info};

/// Default Ollama endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default request timeout; local models can be slow on first load
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// LLM Gateway implementation for a local Ollama server
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    /// Create a gateway for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| OllamaError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(OllamaError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OllamaError::ClientBuild(e.to_string()))?;

        info!("OllamaGateway initialized ({})", base_url);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn list_tags(&self) -> Result<TagsResponse> {
        let url = self.endpoint("tags");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| OllamaError::from_transport(&url, e))?;
        serde_json::from_str(&raw).map_err(|e| OllamaError::ParseError {
            error: e.to_string(),
            raw,
        })
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &ModelSettings,
        system_prompt: &str,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession::new(
            self.client.clone(),
            self.endpoint("chat"),
            model,
            system_prompt,
        )))
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        let tags = self.list_tags().await?;
        Ok(tags
            .models
            .iter()
            .map(|entry| entry.short_name().parse().unwrap_or_default())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let gateway =
            OllamaGateway::new("http://gpu-box:11434/", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.base_url(), "http://gpu-box:11434");
        assert_eq!(gateway.endpoint("chat"), "http://gpu-box:11434/api/chat");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(matches!(
            OllamaGateway::new("ftp://localhost", Duration::from_secs(5)),
            Err(OllamaError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            OllamaGateway::new("not a url", Duration::from_secs(5)),
            Err(OllamaError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_session_uses_requested_model() {
        let gateway =
            OllamaGateway::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .unwrap();
        let settings = ModelSettings::new(Model::CodeLlama, 0.1).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&settings, "Fix bugs.")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::CodeLlama);
    }
}
