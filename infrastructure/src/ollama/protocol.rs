//! Ollama REST API message types
//!
//! Only the subset of `/api/chat` and `/api/tags` the generator needs.

use codegen_domain::AgentReply;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

impl ChatRequest {
    /// Non-streaming request with one system and one user message
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_content: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_content),
            ],
            stream: false,
            options: ChatOptions { temperature },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling options
#[derive(Debug, Clone, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

/// Convert a decoded `/api/chat` body into an agent reply.
///
/// A string at `message.content` is the normal shape. Anything else is
/// kept whole so the runner can still show something.
pub fn reply_from_body(body: Value) -> AgentReply {
    match body.pointer("/message/content").and_then(Value::as_str) {
        Some(content) => AgentReply::TextPayload(content.to_string()),
        None => AgentReply::Opaque(body),
    }
}

/// Body of `GET /api/tags`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    pub name: String,
}

impl TagEntry {
    /// Model name without the implicit `:latest` tag
    pub fn short_name(&self) -> &str {
        self.name.strip_suffix(":latest").unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest::new("tinyllama", "Be brief.", "add two numbers", 0.2);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "tinyllama");
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][0], json!({"role": "system", "content": "Be brief."}));
        assert_eq!(
            value["messages"][1],
            json!({"role": "user", "content": "add two numbers"})
        );
        assert!((value["options"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_message_content_becomes_text_payload() {
        let body = json!({
            "model": "tinyllama",
            "message": {"role": "assistant", "content": "  print('hi')\n"},
            "done": true
        });
        assert_eq!(
            reply_from_body(body),
            AgentReply::TextPayload("  print('hi')\n".to_string())
        );
    }

    #[test]
    fn test_unexpected_shape_is_opaque() {
        let body = json!({"done": true, "message": {"role": "assistant"}});
        assert_eq!(reply_from_body(body.clone()), AgentReply::Opaque(body));
    }

    #[test]
    fn test_tags_short_name() {
        let tags: TagsResponse = serde_json::from_value(json!({
            "models": [{"name": "tinyllama:latest"}, {"name": "llama3.1:70b"}]
        }))
        .unwrap();
        let names: Vec<_> = tags.models.iter().map(TagEntry::short_name).collect();
        assert_eq!(names, vec!["tinyllama", "llama3.1:70b"]);
    }
}
