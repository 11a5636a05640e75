//! Format registry.
//!
//! Every [`ColorFormat`] maps to exactly one [`ConversionEntry`]. The mapping is built with an
//! exhaustive `match`, so adding a format without an entry does not compile, and
//! [`FormatRegistry::lookup`] cannot fail.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use color_convert_css::{Color, SerializeOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb` / `#rrggbbaa`.
    Hex,
    /// `rgb()` / `rgba()`.
    Rgb,
    /// `hsl()` / `hsla()`.
    Hsl,
    /// `oklch()`.
    Oklch,
}

impl ColorFormat {
    /// Number of formats.
    pub const COUNT: usize = 4;

    /// All formats, in declaration order.
    pub const ALL: [ColorFormat; Self::COUNT] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Oklch,
    ];

    /// Stable identifier (`"hex"`, `"rgb"`, `"hsl"`, `"oklch"`).
    pub fn id(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Oklch => "oklch",
        }
    }

    fn index(self) -> usize {
        match self {
            ColorFormat::Hex => 0,
            ColorFormat::Rgb => 1,
            ColorFormat::Hsl => 2,
            ColorFormat::Oklch => 3,
        }
    }

    fn description(self) -> &'static str {
        match self {
            ColorFormat::Hex => "Hexadecimal sRGB, e.g. #4bb3a1",
            ColorFormat::Rgb => "Functional sRGB, e.g. rgb(75, 179, 161)",
            ColorFormat::Hsl => "Hue, saturation, lightness, e.g. hsl(170, 41%, 50%)",
            ColorFormat::Oklch => "Perceptual lightness, chroma, hue, e.g. oklch(0.7 0.1 180)",
        }
    }

    fn render(self, color: Color, options: &SerializeOptions) -> String {
        match self {
            ColorFormat::Hex => color.to_hex_string(options),
            ColorFormat::Rgb => color.to_rgb_string(options),
            ColorFormat::Hsl => color.to_hsl_string(options),
            ColorFormat::Oklch => color.to_oklch_string(options),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a [`ColorFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color format '{0}' (expected one of: hex, rgb, hsl, oklch)")]
pub struct UnknownFormatError(pub String);

impl FromStr for ColorFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownFormatError(s.to_string()))
    }
}

/// How to convert arbitrary color text into one target format.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionEntry {
    format: ColorFormat,
    label: &'static str,
    description: &'static str,
    options: SerializeOptions,
}

impl ConversionEntry {
    fn new(format: ColorFormat, options: SerializeOptions) -> Self {
        Self {
            format,
            label: format.id(),
            description: format.description(),
            options,
        }
    }

    /// Target format.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Short label for pickers.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// One-line description for pickers.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Serializer options applied when rendering.
    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Parse `raw` in any supported notation and render it in this entry's format.
    ///
    /// Surrounding whitespace is ignored. Fails with [`ConvertError::Parse`] carrying `raw`.
    pub fn convert(&self, raw: &str) -> Result<String, ConvertError> {
        let color = Color::parse(raw).map_err(|reason| ConvertError::Parse {
            text: raw.to_string(),
            reason,
        })?;
        Ok(self.format.render(color, &self.options))
    }
}

/// Fixed mapping from [`ColorFormat`] to [`ConversionEntry`].
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    entries: [ConversionEntry; ColorFormat::COUNT],
    offered: Vec<ColorFormat>,
}

impl FormatRegistry {
    /// Build the registry from configuration.
    pub fn new(config: &ConvertConfig) -> Self {
        let options = config.serialize_options();
        Self {
            entries: ColorFormat::ALL.map(|format| ConversionEntry::new(format, options)),
            offered: config.formats.clone(),
        }
    }

    /// Entries offered to the user, in declaration order.
    ///
    /// Configuration may hide formats from this list; [`lookup`](Self::lookup) still resolves
    /// every format.
    pub fn list_entries(&self) -> impl Iterator<Item = &ConversionEntry> + '_ {
        self.entries
            .iter()
            .filter(|entry| self.offered.contains(&entry.format))
    }

    /// The entry for `format`.
    pub fn lookup(&self, format: ColorFormat) -> &ConversionEntry {
        &self.entries[format.index()]
    }

    /// Returns `true` if `format` is offered by [`list_entries`](Self::list_entries).
    pub fn is_offered(&self, format: ColorFormat) -> bool {
        self.offered.contains(&format)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}
