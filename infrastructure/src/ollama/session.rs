//! Ollama chat session.
//!
//! Ollama's `/api/chat` is stateless, so a session is just the model, the
//! sampling temperature and the system prompt bundled together. Every
//! [`send`](LlmSession::send) is one request with exactly two messages.

use crate::ollama::error::{OllamaError, Result};
use crate::ollama::protocol::{ChatRequest, reply_from_body};
use async_trait::async_trait;
use codegen_application::ports::llm_gateway::{GatewayError, LlmSession};
use codegen_domain::{AgentReply, Model, ModelSettings};
use serde_json::Value;
use tracing::debug;

pub struct OllamaSession {
    client: reqwest::Client,
    chat_url: String,
    model: Model,
    temperature: f32,
    system_prompt: String,
}

impl OllamaSession {
    pub fn new(
        client: reqwest::Client,
        chat_url: impl Into<String>,
        settings: &ModelSettings,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            client,
            chat_url: chat_url.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            system_prompt: system_prompt.into(),
        }
    }

    /// Build the request body for one user message
    pub fn request_for(&self, content: &str) -> ChatRequest {
        ChatRequest::new(
            self.model.as_str(),
            self.system_prompt.as_str(),
            content,
            self.temperature,
        )
    }

    /// Send one user message and decode the raw reply
    pub async fn chat(&self, content: &str) -> Result<AgentReply> {
        let request = self.request_for(content);
        debug!("POST {} (model: {})", self.chat_url, self.model);

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OllamaError::from_transport(&self.chat_url, e))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| OllamaError::from_transport(&self.chat_url, e))?;

        if !status.is_success() {
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body: error_message(&raw),
            });
        }

        let body: Value = serde_json::from_str(&raw).map_err(|e| OllamaError::ParseError {
            error: e.to_string(),
            raw: raw.clone(),
        })?;

        Ok(reply_from_body(body))
    }
}

/// Ollama reports failures as `{"error": "..."}`; fall back to the raw body.
fn error_message(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| raw.trim().to_string())
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<AgentReply, GatewayError> {
        self.chat(content).await.map_err(GatewayError::from)
    }
}
