//! The "Convert Color" command.
//!
//! Glue between the registry, a [`FormatChooser`] and a [`DocumentHost`]: present the offered
//! formats, resolve the pick, then hand the entry to [`transaction::run`]. The choice is always
//! resolved before any span is read.

use crate::config::ConvertConfig;
use crate::error::CommandError;
use crate::format::FormatRegistry;
use crate::host::{DocumentHost, FormatChoice, FormatChooser};
use crate::transaction::{self, TransactionSummary};

/// Command identifier hosts register the command under.
pub const COMMAND_ID: &str = "color-convert.convert";

/// Human-readable command title.
pub const COMMAND_TITLE: &str = "Convert Color";

/// A ready-to-run color conversion command.
#[derive(Debug, Clone)]
pub struct ConvertColorCommand {
    registry: FormatRegistry,
    diagnostic_source: String,
}

impl ConvertColorCommand {
    /// Build the command (and its registry) from configuration.
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            registry: FormatRegistry::new(config),
            diagnostic_source: config.diagnostic_source.clone(),
        }
    }

    /// The format registry backing this command.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Items to present in a chooser, in declaration order.
    pub fn choices(&self) -> Vec<FormatChoice> {
        self.registry.list_entries().map(FormatChoice::from).collect()
    }

    /// Ask `chooser` for a format, then convert every span in `host`.
    pub fn execute<C, H>(
        &self,
        chooser: &mut C,
        host: &mut H,
    ) -> Result<TransactionSummary, CommandError>
    where
        C: FormatChooser + ?Sized,
        H: DocumentHost + ?Sized,
    {
        let choices = self.choices();
        let picked = chooser
            .choose(&choices)
            .map_err(|err| CommandError::Chooser(Box::new(err)))?;
        let entry = picked.map(|format| self.registry.lookup(format));

        Ok(transaction::run(entry, host, &self.diagnostic_source)?)
    }
}

impl Default for ConvertColorCommand {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}
