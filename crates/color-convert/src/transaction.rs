//! Batch conversion transaction.
//!
//! One transaction converts every selected span with a single [`ConversionEntry`]:
//!
//! 1. read all spans from the host (no writes yet)
//! 2. convert each span independently; a failure becomes data, never an early return
//! 3. commit all replacements as one atomic edit batch
//! 4. publish the failures of *this* run as the document's complete diagnostic set
//!
//! Only step 3 can abort the transaction.

use crate::diagnostics::{Diagnostic, INVALID_COLOR_CODE};
use crate::error::{ConvertError, TransactionError};
use crate::format::{ColorFormat, ConversionEntry};
use crate::host::DocumentHost;
use crate::span::{SpanEdit, TextSpan};
use tracing::{debug, info, warn};

/// Result of converting one span.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// The span parsed and was rendered in the target format.
    Replacement {
        /// The span as read.
        span: TextSpan,
        /// Rendered text (may equal `span.text`).
        new_text: String,
    },
    /// The span could not be converted and will be left untouched.
    Failure {
        /// The span as read.
        span: TextSpan,
        /// Why conversion failed.
        error: ConvertError,
    },
}

impl ConversionOutcome {
    /// The span this outcome belongs to.
    pub fn span(&self) -> &TextSpan {
        match self {
            ConversionOutcome::Replacement { span, .. } | ConversionOutcome::Failure { span, .. } => {
                span
            }
        }
    }

    /// Returns `true` for [`ConversionOutcome::Replacement`].
    pub fn is_replacement(&self) -> bool {
        matches!(self, ConversionOutcome::Replacement { .. })
    }
}

/// Per-span outcomes of one conversion pass, in span order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    format: ColorFormat,
    outcomes: Vec<ConversionOutcome>,
}

impl ConversionReport {
    /// Target format of the pass.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// All outcomes, in the order the spans were given.
    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    /// Number of successful conversions.
    pub fn replacement_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_replacement()).count()
    }

    /// Number of failed conversions.
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.replacement_count()
    }

    /// Replacement edits for every successful span.
    pub fn edits(&self) -> Vec<SpanEdit> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ConversionOutcome::Replacement { span, new_text } => {
                    Some(SpanEdit::new(span.range, new_text.clone()))
                }
                ConversionOutcome::Failure { .. } => None,
            })
            .collect()
    }

    /// One error diagnostic per failed span.
    pub fn diagnostics(&self, source: &str) -> Vec<Diagnostic> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ConversionOutcome::Failure { span, error } => Some(
                    Diagnostic::error(span.range, error.to_string())
                        .with_code(INVALID_COLOR_CODE)
                        .with_source(source),
                ),
                ConversionOutcome::Replacement { .. } => None,
            })
            .collect()
    }
}

/// Convert every span with `entry`. Pure: no host interaction.
pub fn convert_spans(entry: &ConversionEntry, spans: Vec<TextSpan>) -> ConversionReport {
    let outcomes = spans
        .into_iter()
        .map(|span| match entry.convert(&span.text) {
            Ok(new_text) => {
                debug!(range = %span.range, from = %span.text, to = %new_text, "converted span");
                ConversionOutcome::Replacement { span, new_text }
            }
            Err(error) => {
                warn!(range = %span.range, %error, "span is not a color");
                ConversionOutcome::Failure { span, error }
            }
        })
        .collect();

    ConversionReport {
        format: entry.format(),
        outcomes,
    }
}

/// What a finished transaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionSummary {
    /// No format was chosen; nothing was read, written or published.
    Dismissed,
    /// The batch ran.
    Completed {
        /// Target format.
        format: ColorFormat,
        /// Spans rewritten.
        converted: usize,
        /// Spans left untouched and reported as diagnostics.
        failed: usize,
    },
}

/// Run one batch conversion against `host`.
///
/// `entry == None` means the chooser was dismissed and is a no-op. Diagnostics are tagged with
/// `diagnostic_source` and their ranges refer to the document *after* the edit batch. If the
/// host rejects the edit batch, nothing is published and [`TransactionError::EditApplication`]
/// is returned.
pub fn run<H>(
    entry: Option<&ConversionEntry>,
    host: &mut H,
    diagnostic_source: &str,
) -> Result<TransactionSummary, TransactionError>
where
    H: DocumentHost + ?Sized,
{
    let Some(entry) = entry else {
        debug!("no format chosen; skipping conversion");
        return Ok(TransactionSummary::Dismissed);
    };

    let spans = host.spans();
    let report = convert_spans(entry, spans);

    let edits = report.edits();
    if !edits.is_empty() {
        host.apply_edits(&edits)
            .map_err(|err| TransactionError::EditApplication {
                edits: edits.len(),
                source: Box::new(err),
            })?;
    }

    // Failed spans were not edited, but earlier replacements may have shifted them.
    let mut committed = edits.iter().collect::<Vec<_>>();
    committed.sort_by_key(|edit| (edit.range.start, edit.range.end));
    let diagnostics = report
        .diagnostics(diagnostic_source)
        .into_iter()
        .map(|mut diagnostic| {
            diagnostic.range = diagnostic.range.remap(&committed);
            diagnostic
        })
        .collect();
    host.publish_diagnostics(diagnostics);

    let summary = TransactionSummary::Completed {
        format: report.format(),
        converted: report.replacement_count(),
        failed: report.failure_count(),
    };
    info!(
        format = %report.format(),
        converted = report.replacement_count(),
        failed = report.failure_count(),
        "color conversion finished"
    );
    Ok(summary)
}
