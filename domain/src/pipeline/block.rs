use serde::{Deserialize, Serialize};

/// One unit of output a UI surface renders, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Section heading
    Heading { text: String },
    /// Free text the model wrote, markdown-flavored
    Markdown { text: String },
    /// Literal code block
    Code { language: String, code: String },
    /// Success-styled banner
    Success { text: String },
    /// Error-styled banner
    Error { text: String },
}

impl RenderBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        RenderBlock::Heading { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        RenderBlock::Markdown { text: text.into() }
    }

    pub fn code(language: impl Into<String>, code: impl Into<String>) -> Self {
        RenderBlock::Code {
            language: language.into(),
            code: code.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        RenderBlock::Success { text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        RenderBlock::Error { text: text.into() }
    }

    /// Returns the heading text if this is a `Heading` block.
    pub fn as_heading(&self) -> Option<&str> {
        match self {
            RenderBlock::Heading { text } => Some(text),
            _ => None,
        }
    }
}
