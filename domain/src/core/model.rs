//! Model value object representing a locally hosted LLM

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Local models known to the generator (Value Object)
///
/// Names follow the Ollama tag convention. Anything not listed here is kept
/// verbatim as [`Model::Custom`], so `"llama3.1:70b"` works without a code
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    TinyLlama,
    Llama32,
    Qwen25Coder,
    CodeLlama,
    DeepSeekCoder,
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the model server
    pub fn as_str(&self) -> &str {
        match self {
            Model::TinyLlama => "tinyllama",
            Model::Llama32 => "llama3.2",
            Model::Qwen25Coder => "qwen2.5-coder",
            Model::CodeLlama => "codellama",
            Model::DeepSeekCoder => "deepseek-coder",
            Model::Custom(s) => s,
        }
    }

    /// Whether the model is tuned for code generation
    pub fn is_code_model(&self) -> bool {
        matches!(
            self,
            Model::Qwen25Coder | Model::CodeLlama | Model::DeepSeekCoder
        )
    }
}

impl Default for Model {
    /// Returns the default model (tinyllama)
    fn default() -> Self {
        Model::TinyLlama
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "tinyllama" => Model::TinyLlama,
            "llama3.2" => Model::Llama32,
            "qwen2.5-coder" => Model::Qwen25Coder,
            "codellama" => Model::CodeLlama,
            "deepseek-coder" => Model::DeepSeekCoder,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible; unknown names become Custom(...)
        Ok(s.parse().unwrap_or_default())
    }
}

/// Default sampling temperature shared by every agent
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// The fixed model handle every agent shares: which model, at which
/// temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub model: Model,
    pub temperature: f32,
}

impl ModelSettings {
    /// Create settings, rejecting an empty model id or an out-of-range temperature
    pub fn new(model: Model, temperature: f32) -> Result<Self, DomainError> {
        if model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidModel(model.to_string()));
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(DomainError::InvalidTemperature(temperature.to_string()));
        }
        Ok(Self { model, temperature })
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
