//! String utilities for the domain layer.

/// Single-line preview of model or user text for log lines.
///
/// Newlines collapse to spaces and the result is cut to `max_chars`
/// characters with a trailing ellipsis.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("def f():\n    pass", 40), "def f():     pass");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("hello world", 8), "hello...");
        // Multi-byte characters count as one
        assert_eq!(preview("→→→→→→", 5), "→→...");
    }
}
