use color_convert_css::ParseColorError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors produced while converting a single span.
pub enum ConvertError {
    #[error("`{text}` is not a valid color: {reason}")]
    /// The span text is not a recognizable color literal.
    ///
    /// `reason` is rendered inline and not exposed through `Error::source`, so the diagnostic
    /// message is complete on its own.
    Parse {
        /// The offending span text, verbatim.
        text: String,
        /// Why parsing failed.
        reason: ParseColorError,
    },
}

impl ConvertError {
    /// The original span text that failed to convert.
    pub fn text(&self) -> &str {
        match self {
            ConvertError::Parse { text, .. } => text,
        }
    }
}

#[derive(Debug, Error)]
/// Errors that abort a whole batch conversion.
pub enum TransactionError {
    #[error("failed to apply {edits} color edit(s): {source}")]
    /// The host could not commit the edit batch. The document is left unchanged.
    EditApplication {
        /// Number of edits in the rejected batch.
        edits: usize,
        /// The host's error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

#[derive(Debug, Error)]
/// Errors returned by [`ConvertColorCommand::execute`](crate::ConvertColorCommand::execute).
pub enum CommandError {
    #[error("format chooser failed: {0}")]
    /// The chooser itself failed (e.g. terminal I/O), as opposed to being dismissed.
    Chooser(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error(transparent)]
    /// The conversion transaction aborted.
    Transaction(#[from] TransactionError),
}
