//! Text spans and edits expressed in character offsets.
//!
//! All offsets are counted in Unicode scalar values (`char`) from the start of the document,
//! the same convention `TextDocument` and the diagnostics model use.

use std::fmt;

/// A half-open character-offset range (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SpanRange {
    /// Range start offset (inclusive).
    pub start: usize,
    /// Range end offset (exclusive).
    pub end: usize,
}

impl SpanRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters (zero for inverted ranges).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both ranges share at least one character.
    pub fn overlaps(&self, other: &SpanRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Map this pre-edit range into the document produced by `edits`.
    ///
    /// `edits` must be sorted by start offset and non-overlapping. A range that exactly covers
    /// an edit ends up covering its replacement text.
    pub fn remap(self, edits: &[&SpanEdit]) -> SpanRange {
        SpanRange::new(
            remap_offset(self.start, edits, false),
            remap_offset(self.end, edits, true),
        )
    }
}

/// Map a pre-edit offset through `edits` (sorted ascending, non-overlapping).
///
/// Offsets inside a replaced range snap to the start of the replacement, or to its end when
/// `towards_end` is set.
fn remap_offset(offset: usize, edits: &[&SpanEdit], towards_end: bool) -> usize {
    let mut shift: isize = 0;
    for edit in edits {
        let range = edit.range;
        if range.end <= offset {
            shift += edit.inserted_len() as isize - range.len() as isize;
        } else if range.start < offset {
            let start = range.start.saturating_add_signed(shift);
            return if towards_end {
                start + edit.inserted_len()
            } else {
                start
            };
        } else {
            break;
        }
    }
    offset.saturating_add_signed(shift)
}

impl fmt::Display for SpanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A document location plus the text it contained when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Where the span lives in the document.
    pub range: SpanRange,
    /// The span's text at read time.
    pub text: String,
}

impl TextSpan {
    /// Create a span from a range and its current text.
    pub fn new(range: SpanRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// A requested replacement of one range with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
    /// Range to replace (pre-edit offsets).
    pub range: SpanRange,
    /// Replacement text.
    pub new_text: String,
}

impl SpanEdit {
    /// Create a replacement edit.
    pub fn new(range: SpanRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Length of `new_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.new_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_offset_shifts_and_snaps() {
        let a = SpanEdit::new(SpanRange::new(2, 4), "xxxxx");
        let b = SpanEdit::new(SpanRange::new(10, 13), "");
        let edits = vec![&a, &b];

        assert_eq!(remap_offset(0, &edits, false), 0);
        assert_eq!(remap_offset(2, &edits, false), 2);
        assert_eq!(remap_offset(4, &edits, true), 7);
        assert_eq!(remap_offset(3, &edits, false), 2);
        assert_eq!(remap_offset(3, &edits, true), 7);
        assert_eq!(remap_offset(8, &edits, false), 11);
        assert_eq!(remap_offset(13, &edits, false), 13);
        assert_eq!(remap_offset(20, &edits, false), 20);
    }

    #[test]
    fn test_remap_range_covering_edit() {
        let a = SpanEdit::new(SpanRange::new(0, 7), "hsl(0, 100%, 50%)");
        let edits = vec![&a];
        assert_eq!(SpanRange::new(0, 7).remap(&edits), SpanRange::new(0, 17));
        assert_eq!(SpanRange::new(8, 19).remap(&edits), SpanRange::new(18, 29));
    }

    #[test]
    fn test_overlaps_is_strict() {
        assert!(SpanRange::new(0, 5).overlaps(&SpanRange::new(4, 6)));
        assert!(!SpanRange::new(0, 5).overlaps(&SpanRange::new(5, 6)));
    }
}
