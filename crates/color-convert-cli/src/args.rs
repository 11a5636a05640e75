//! Command-line definitions.

use clap::Parser;
use color_convert::{ColorFormat, SpanRange};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "color-convert", version)]
#[command(about = "Convert color literals in a file to hex, rgb, hsl or oklch")]
#[command(long_about = "Convert color literals in a file to hex, rgb, hsl or oklch.

Every color literal in FILE is converted, or only the ranges given with --span.
Without --to an interactive picker asks for the target format.
Spans that are not colors are left untouched and reported on stderr.

EXAMPLES:
    color-convert style.css --to oklch             Print style.css with every color as oklch()
    color-convert style.css --to hex --write       Rewrite style.css in place
    color-convert style.css --span 10..17 --json   Pick a format, report diagnostics as JSON

EXIT STATUS:
    0  every span converted (or the picker was dismissed)
    1  some spans were not colors
    2  the command itself failed")]
pub struct Cli {
    /// File to convert
    #[arg(required_unless_present = "list_formats")]
    pub file: Option<PathBuf>,

    /// Target format; skips the interactive picker
    #[arg(long, short, value_name = "FORMAT")]
    pub to: Option<ColorFormat>,

    /// Character range to convert (repeatable); defaults to every detected color literal
    #[arg(long = "span", short, value_name = "START..END", value_parser = parse_span)]
    pub spans: Vec<SpanRange>,

    /// YAML configuration file
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the result back to FILE instead of printing it
    #[arg(long, short)]
    pub write: bool,

    /// Report diagnostics as a JSON publishDiagnostics object
    #[arg(long)]
    pub json: bool,

    /// List the formats offered by the configuration and exit
    #[arg(long)]
    pub list_formats: bool,
}

/// Parse `START..END` (character offsets, end exclusive).
pub fn parse_span(value: &str) -> Result<SpanRange, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{value}'"))?;
    let offset = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid offset '{part}': {err}"))
    };
    let (start, end) = (offset(start)?, offset(end)?);
    if start > end {
        return Err(format!("span start {start} is after its end {end}"));
    }
    Ok(SpanRange::new(start, end))
}
