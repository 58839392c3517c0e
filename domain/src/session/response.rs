//! Agent reply type.
//!
//! Model servers do not always answer in the shape we ask for. A chat
//! reply normally carries a text payload, but a server may also return
//! some other JSON document (an unexpected schema, a status object). Both
//! are valid replies and the runner has to turn either into text.
//!
//! ```text
//! {"message": {"content": "..."}}  → AgentReply::TextPayload
//! anything else                    → AgentReply::Opaque
//! ```

use serde::{Deserialize, Serialize};

/// A reply from the model client.
///
/// # Examples
///
/// ```
/// use codegen_domain::session::response::AgentReply;
///
/// let reply = AgentReply::TextPayload("  hi  ".to_string());
/// assert_eq!(reply.into_text(), "hi");
///
/// let reply = AgentReply::Opaque(serde_json::json!({"done": true}));
/// assert_eq!(reply.into_text(), r#"{"done":true}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AgentReply {
    /// The reply exposes a textual payload.
    TextPayload(String),
    /// The reply has no distinguishable text field.
    Opaque(serde_json::Value),
}

impl AgentReply {
    /// Normalize into trimmed text.
    ///
    /// `Opaque` values are rendered with their generic string form, which
    /// for JSON is the compact document text.
    pub fn into_text(self) -> String {
        match self {
            AgentReply::TextPayload(s) => s.trim().to_string(),
            AgentReply::Opaque(value) => value.to_string().trim().to_string(),
        }
    }
}

impl From<String> for AgentReply {
    fn from(s: String) -> Self {
        AgentReply::TextPayload(s)
    }
}

impl From<&str> for AgentReply {
    fn from(s: &str) -> Self {
        AgentReply::TextPayload(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payload_is_trimmed() {
        assert_eq!(AgentReply::from("  hi  ").into_text(), "hi");
    }

    #[test]
    fn opaque_string_value_keeps_json_quotes() {
        let reply = AgentReply::Opaque(serde_json::json!("raw"));
        assert_eq!(reply.into_text(), "\"raw\"");
    }

    #[test]
    fn opaque_object_is_rendered_as_json() {
        let reply = AgentReply::Opaque(serde_json::json!({"model": "tinyllama"}));
        assert_eq!(reply.into_text(), r#"{"model":"tinyllama"}"#);
    }
}
