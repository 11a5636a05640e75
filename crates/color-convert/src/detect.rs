//! Color literal detection.
//!
//! Finds text that *looks like* a color literal so hosts can select every color in a document.
//! Detection is deliberately loose (`#12345` is found too); whether a candidate is really a color
//! is decided by conversion, which reports the malformed ones as diagnostics.

use crate::span::SpanRange;
use regex::Regex;
use std::sync::OnceLock;

const COLOR_LITERAL_PATTERN: &str = r"(?i)#[0-9a-f]{3,8}\b|\b(?:rgba?|hsla?|oklch)\([^()\n]*\)";

fn color_literal_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(COLOR_LITERAL_PATTERN).expect("color literal pattern is valid"))
}

/// Character ranges of candidate color literals in `text`, in document order.
pub fn find_color_literals(text: &str) -> Vec<SpanRange> {
    let mut ranges = Vec::new();
    // Running byte -> char offset conversion; matches arrive in ascending order.
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for m in color_literal_regex().find_iter(text) {
        char_pos += text[byte_pos..m.start()].chars().count();
        let start = char_pos;
        char_pos += m.as_str().chars().count();
        byte_pos = m.end();
        ranges.push(SpanRange::new(start, char_pos));
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_each_notation() {
        let text = "a: #fff; b: rgb(1, 2, 3); c: hsla(0 0% 0% / 1); d: oklch(0.7 0.1 180);";
        let found = find_color_literals(text)
            .into_iter()
            .map(|r| text[r.start..r.end].to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            vec![
                "#fff",
                "rgb(1, 2, 3)",
                "hsla(0 0% 0% / 1)",
                "oklch(0.7 0.1 180)"
            ]
        );
    }

    #[test]
    fn test_offsets_are_chars_not_bytes() {
        let text = "色: #ff0000";
        assert_eq!(find_color_literals(text), vec![SpanRange::new(3, 10)]);
    }

    #[test]
    fn test_ignores_identifiers_and_long_hex() {
        assert!(find_color_literals("torgb(1, 2, 3)").is_empty());
        assert!(find_color_literals("#123456789").is_empty());
        assert!(find_color_literals("issue #12").is_empty());
    }
}
