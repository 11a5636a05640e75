//! Host collaborator interfaces.
//!
//! The conversion core never talks to an editor directly. A host provides:
//! - a [`DocumentHost`]: current selections, atomic edit application, diagnostics publishing
//! - a [`FormatChooser`]: the user's pick among the offered formats (or a dismissal)
//!
//! Both calls are the command's suspension points. They are modelled as blocking calls; a host
//! that needs to wait for UI or I/O does so inside its implementation.

use crate::diagnostics::Diagnostic;
use crate::format::{ColorFormat, ConversionEntry};
use crate::span::{SpanEdit, TextSpan};
use std::convert::Infallible;

/// The document side of the command.
pub trait DocumentHost {
    /// Error returned when an edit batch cannot be committed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current selections with their text, in selection order.
    fn spans(&self) -> Vec<TextSpan>;

    /// Apply every edit, or none of them.
    ///
    /// Ranges are pre-edit offsets; implementations must not observe intermediate states.
    fn apply_edits(&mut self, edits: &[SpanEdit]) -> Result<(), Self::Error>;

    /// Replace the document's diagnostics with `diagnostics`.
    fn publish_diagnostics(&mut self, diagnostics: Vec<Diagnostic>);
}

/// One item presented by a [`FormatChooser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatChoice {
    /// Format selected by this item.
    pub format: ColorFormat,
    /// Short label.
    pub label: &'static str,
    /// One-line description.
    pub description: &'static str,
}

impl From<&ConversionEntry> for FormatChoice {
    fn from(entry: &ConversionEntry) -> Self {
        Self {
            format: entry.format(),
            label: entry.label(),
            description: entry.description(),
        }
    }
}

/// Presents format choices and returns the user's pick.
pub trait FormatChooser {
    /// Error returned when the chooser itself fails (not when the user dismisses it).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `Ok(None)` if the user dismissed the chooser.
    fn choose(&mut self, choices: &[FormatChoice]) -> Result<Option<ColorFormat>, Self::Error>;
}

/// A non-interactive chooser with a predetermined answer.
///
/// Returns `None` if the predetermined format is not among the offered choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedChoice(pub Option<ColorFormat>);

impl FormatChooser for FixedChoice {
    type Error = Infallible;

    fn choose(&mut self, choices: &[FormatChoice]) -> Result<Option<ColorFormat>, Self::Error> {
        let Some(format) = self.0 else {
            return Ok(None);
        };
        if choices.iter().any(|choice| choice.format == format) {
            Ok(Some(format))
        } else {
            tracing::warn!(%format, "requested format is not offered; treating as dismissed");
            Ok(None)
        }
    }
}
