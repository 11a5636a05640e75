//! Diagnostics data model.
//!
//! Conversion failures are reported as structured diagnostics attached to the span that failed.
//! Hosts can use them for:
//! - problems panels / gutter markers
//! - inline messages next to the untouched literal
//!
//! A host always receives the **complete** set for a document; a new set replaces the old one.

use crate::span::SpanRange;

/// Diagnostic code attached to every conversion failure.
pub const INVALID_COLOR_CODE: &str = "invalid-color";

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

impl DiagnosticSeverity {
    /// Lowercase label (`"error"`, `"warning"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Information => "information",
            DiagnosticSeverity::Hint => "hint",
        }
    }

    /// Numeric severity as used by LSP `publishDiagnostics` (1 = error .. 4 = hint).
    pub fn lsp_value(self) -> u8 {
        match self {
            DiagnosticSeverity::Error => 1,
            DiagnosticSeverity::Warning => 2,
            DiagnosticSeverity::Information => 3,
            DiagnosticSeverity::Hint => 4,
        }
    }
}

/// A single diagnostic item for the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic range in character offsets.
    pub range: SpanRange,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Optional diagnostic code.
    pub code: Option<String>,
    /// Optional diagnostic source (e.g. `"color-convert"`).
    pub source: Option<String>,
    /// Diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic without code or source.
    pub fn error(range: SpanRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Error,
            code: None,
            source: None,
            message: message.into(),
        }
    }

    /// Attach a code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
