//! `color-convert` command-line host.
//!
//! Loads a file, selects every color literal (or the `--span` ranges), asks for a target format
//! (`--to` or an interactive picker), runs the conversion command against a headless
//! [`TextDocument`] and prints the result.
//!
//! # Usage
//!
//! ```bash
//! color-convert style.css --to oklch
//! color-convert style.css --write          # pick a format interactively, rewrite in place
//! color-convert --list-formats --config colors.yaml
//! ```

mod args;
mod picker;
mod report;

use args::Cli;
use clap::Parser;
use color_convert::{
    CommandError, ConfigError, ConvertColorCommand, ConvertConfig, DocumentError, FixedChoice,
    TextDocument, TransactionSummary, find_color_literals,
};
use picker::TerminalPicker;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid --span: {0}")]
    Selection(#[from] DocumentError),

    #[error("format '{0}' is not enabled by the configuration")]
    FormatNotOffered(String),

    #[error("no --to given and no terminal to ask on")]
    NoTerminal,

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("{0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("color-convert: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    let command = ConvertColorCommand::new(&config);

    if cli.list_formats {
        let mut out = io::stdout().lock();
        for choice in command.choices() {
            writeln!(out, "{:<6} {}", choice.label, choice.description).map_err(CliError::Output)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    // clap guarantees FILE unless --list-formats was given.
    let Some(path) = cli.file.as_deref() else {
        return Ok(ExitCode::from(2));
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc = TextDocument::new(&text);
    let selections = if cli.spans.is_empty() {
        find_color_literals(&text)
    } else {
        cli.spans.clone()
    };
    doc.set_selections(selections)?;

    let summary = match cli.to {
        Some(format) => {
            if !command.registry().is_offered(format) {
                return Err(CliError::FormatNotOffered(format.to_string()));
            }
            command.execute(&mut FixedChoice(Some(format)), &mut doc)?
        }
        None => {
            if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
                return Err(CliError::NoTerminal);
            }
            let subtitle = format!(
                "{} ({} span(s))",
                file_name(path),
                doc.selections().len()
            );
            command.execute(&mut TerminalPicker::new(subtitle), &mut doc)?
        }
    };

    write_output(cli, path, &doc, summary)?;

    Ok(match summary {
        TransactionSummary::Completed { failed, .. } if failed > 0 => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    })
}

fn write_output(
    cli: &Cli,
    path: &Path,
    doc: &TextDocument,
    summary: TransactionSummary,
) -> Result<(), CliError> {
    let converted = matches!(summary, TransactionSummary::Completed { converted, .. } if converted > 0);
    if cli.write {
        if converted {
            fs::write(path, doc.text()).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    } else {
        let mut out = io::stdout().lock();
        out.write_all(doc.text().as_bytes())
            .and_then(|()| out.flush())
            .map_err(CliError::Output)?;
    }

    if cli.json {
        let value = report::render_json(&report::file_uri(path), doc);
        eprintln!("{value}");
    } else {
        eprint!("{}", report::render_human(path, doc));
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
