//! Headless in-memory document.
//!
//! [`TextDocument`] is a small [`DocumentHost`] backed by a [`Rope`]: text, a list of
//! selections, the currently published diagnostics and a version counter. Hosts without their
//! own document model (the CLI, tests) use it directly.

use crate::diagnostics::Diagnostic;
use crate::host::DocumentHost;
use crate::span::{SpanEdit, SpanRange, TextSpan};
use ropey::Rope;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced by [`TextDocument`].
pub enum DocumentError {
    #[error("invalid range {range} (document has {len} chars)")]
    /// A range is inverted or extends past the end of the document.
    InvalidRange {
        /// The offending range.
        range: SpanRange,
        /// Document length in characters.
        len: usize,
    },

    #[error("overlapping edits at {first} and {second}")]
    /// Two edits in one batch touch the same text.
    OverlappingEdits {
        /// The earlier edit's range.
        first: SpanRange,
        /// The later edit's range.
        second: SpanRange,
    },
}

/// A text buffer with selections and diagnostics.
#[derive(Debug, Clone)]
pub struct TextDocument {
    rope: Rope,
    selections: Vec<SpanRange>,
    diagnostics: Vec<Diagnostic>,
    version: u64,
}

impl TextDocument {
    /// Create a document with no selections.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: Vec::new(),
            diagnostics: Vec::new(),
            version: 0,
        }
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Document length in characters.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Incremented once per committed edit batch and once per diagnostics publish.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Text covered by `range`, if the range is valid.
    pub fn slice(&self, range: SpanRange) -> Option<String> {
        self.check_range(range).ok()?;
        Some(self.rope.slice(range.start..range.end).to_string())
    }

    /// Current selections, in selection order.
    pub fn selections(&self) -> &[SpanRange] {
        &self.selections
    }

    /// Replace all selections. Fails without changing anything if any range is invalid.
    pub fn set_selections(&mut self, selections: Vec<SpanRange>) -> Result<(), DocumentError> {
        for range in &selections {
            self.check_range(*range)?;
        }
        self.selections = selections;
        Ok(())
    }

    /// Append one selection.
    pub fn add_selection(&mut self, range: SpanRange) -> Result<(), DocumentError> {
        self.check_range(range)?;
        self.selections.push(range);
        Ok(())
    }

    /// Currently published diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Zero-based `(line, column)` of a character offset, column counted in chars.
    ///
    /// Offsets past the end clamp to the end of the document.
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        (line, offset - self.rope.line_to_char(line))
    }

    /// Zero-based `(line, character)` with the column in UTF-16 code units, as LSP expects.
    pub fn utf16_position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        let character = self.rope.char_to_utf16_cu(offset) - self.rope.char_to_utf16_cu(line_start);
        (line, character)
    }

    fn check_range(&self, range: SpanRange) -> Result<(), DocumentError> {
        let len = self.rope.len_chars();
        if range.start > range.end || range.end > len {
            return Err(DocumentError::InvalidRange { range, len });
        }
        Ok(())
    }
}

impl DocumentHost for TextDocument {
    type Error = DocumentError;

    fn spans(&self) -> Vec<TextSpan> {
        self.selections
            .iter()
            .map(|range| {
                TextSpan::new(*range, self.rope.slice(range.start..range.end).to_string())
            })
            .collect()
    }

    fn apply_edits(&mut self, edits: &[SpanEdit]) -> Result<(), Self::Error> {
        for edit in edits {
            self.check_range(edit.range)?;
        }

        let mut ordered = edits.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|edit| (edit.range.start, edit.range.end));
        for pair in ordered.windows(2) {
            let (first, second) = (pair[0].range, pair[1].range);
            if first.end > second.start || first.start == second.start {
                return Err(DocumentError::OverlappingEdits { first, second });
            }
        }

        // Validation done; from here on nothing can fail.
        // Apply back to front so earlier offsets stay valid.
        for edit in ordered.iter().rev() {
            let range = edit.range;
            if !range.is_empty() {
                self.rope.remove(range.start..range.end);
            }
            if !edit.new_text.is_empty() {
                self.rope.insert(range.start, &edit.new_text);
            }
        }

        self.selections = self
            .selections
            .iter()
            .map(|sel| sel.remap(&ordered))
            .collect();
        self.version += 1;
        Ok(())
    }

    fn publish_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
        self.version += 1;
    }
}
