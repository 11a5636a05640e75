#![warn(missing_docs)]
//! `color-convert` - convert selected color literals between notations.
//!
//! # Overview
//!
//! The user selects one or more spans, each expected to hold a color literal (hex, `rgb()`,
//! `hsl()` or `oklch()`), picks a target format, and every span is rewritten in that format.
//! Spans that are not colors are left untouched and reported as diagnostics; they never stop
//! the other spans from converting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ConvertColorCommand (chooser + host glue)  │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Batch Conversion Transaction               │  ← per-span isolation, atomic commit
//! ├─────────────────────────────────────────────┤
//! │  Format Registry                            │  ← ColorFormat -> ConversionEntry
//! ├─────────────────────────────────────────────┤
//! │  color-convert-css (parse / render)         │  ← color math
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Editors plug in through [`DocumentHost`] and [`FormatChooser`]. [`TextDocument`] is a
//! headless host for tools and tests.
//!
//! # Quick Start
//!
//! ```rust
//! use color_convert::{ColorFormat, ConvertColorCommand, FixedChoice, SpanRange, TextDocument};
//!
//! let mut doc = TextDocument::new("a: #ff0000; b: nope;");
//! doc.add_selection(SpanRange::new(3, 10)).unwrap();
//! doc.add_selection(SpanRange::new(15, 19)).unwrap();
//!
//! let command = ConvertColorCommand::default();
//! command
//!     .execute(&mut FixedChoice(Some(ColorFormat::Hsl)), &mut doc)
//!     .unwrap();
//!
//! assert_eq!(doc.text(), "a: hsl(0, 100%, 50%); b: nope;");
//! assert_eq!(doc.diagnostics().len(), 1);
//! ```
//!
//! # Module Description
//!
//! - [`format`] - format identifiers and the registry
//! - [`transaction`] - the batch conversion transaction
//! - [`command`] - chooser + transaction glue
//! - [`host`] - host collaborator traits
//! - [`document`] - headless rope-backed document
//! - [`config`] - YAML configuration
//! - [`detect`] - color literal detection

pub mod command;
pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod document;
mod error;
pub mod format;
pub mod host;
pub mod span;
pub mod transaction;

pub use command::{COMMAND_ID, COMMAND_TITLE, ConvertColorCommand};
pub use config::{AlphaPolicy, ConfigError, ConvertConfig, DEFAULT_DIAGNOSTIC_SOURCE, HexCase};
pub use detect::find_color_literals;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, INVALID_COLOR_CODE};
pub use document::{DocumentError, TextDocument};
pub use error::{CommandError, ConvertError, TransactionError};
pub use format::{ColorFormat, ConversionEntry, FormatRegistry, UnknownFormatError};
pub use host::{DocumentHost, FixedChoice, FormatChoice, FormatChooser};
pub use span::{SpanEdit, SpanRange, TextSpan};
pub use transaction::{
    ConversionOutcome, ConversionReport, TransactionSummary, convert_spans, run,
};
