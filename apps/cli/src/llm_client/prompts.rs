// Shared prompt fragments. Each stage defines its own prompts.rs alongside
// the code that sends them; this file holds only cross-cutting pieces.

/// System prompt fragment that enforces JSON-array-only output. Both stages
/// append their persona on top of this contract.
pub const JSON_ARRAY_ONLY: &str = "You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Bounds a description to `max` characters for a request line, appending
/// an ellipsis when cut. Counts chars, not bytes, so multi-byte text never
/// splits mid-character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text_appends_ellipsis() {
        assert_eq!(truncate_chars("abcdef", 3), "abc…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Cyrillic chars are 2 bytes each; a byte-based cut would panic.
        assert_eq!(truncate_chars("налаштування", 4), "нала…");
    }
}
