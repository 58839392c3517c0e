/// Language tag the pipeline asks the models to use
pub const DEFAULT_LANGUAGE: &str = "python";

const FENCE: &str = "```";

/// Finds the first fenced block tagged with a given language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExtractor {
    opening: String,
}

impl CodeExtractor {
    pub fn new(language: &str) -> Self {
        Self {
            opening: format!("{FENCE}{language}"),
        }
    }

    /// Extract the contents of the first tagged fenced block.
    ///
    /// - `None` or empty input yields an empty string.
    /// - A block opened by the tagged fence and closed by the next bare
    ///   fence yields its interior, trimmed.
    /// - Otherwise the whole input is returned, trimmed.
    ///
    /// The opening marker is matched literally, so a ```` ```python3 ````
    /// fence also matches and its trailing `3` lands in the content.
    /// Later blocks are ignored.
    pub fn extract(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return String::new();
        };

        if let Some(start) = text.find(&self.opening) {
            let body_start = start + self.opening.len();
            if let Some(len) = text[body_start..].find(FENCE) {
                return text[body_start..body_start + len].trim().to_string();
            }
        }

        text.trim().to_string()
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

/// Extract the first ```` ```python ```` block, see [`CodeExtractor::extract`].
pub fn extract_code(text: Option<&str>) -> String {
    CodeExtractor::default().extract(text)
}
