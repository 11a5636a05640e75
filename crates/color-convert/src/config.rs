//! Command configuration.
//!
//! Loaded from YAML. Every field is optional:
//!
//! ```yaml
//! formats: [hex, rgb, hsl, oklch]   # formats offered by the chooser
//! alpha: auto                       # auto | always | never
//! hex_case: lower                   # lower | upper
//! legacy_syntax: true               # rgb(1, 2, 3) instead of rgb(1 2 3)
//! precision: 3                      # decimal places, 0..=6
//! diagnostic_source: color-convert
//! ```

use crate::format::ColorFormat;
use color_convert_css::{AlphaMode, MAX_PRECISION, SerializeOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default `source` attached to diagnostics.
pub const DEFAULT_DIAGNOSTIC_SOURCE: &str = "color-convert";

#[derive(Debug, Error)]
/// Errors produced while loading configuration.
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Reading the configuration file failed.
    Io(#[from] std::io::Error),

    #[error("`formats` must list at least one format")]
    /// No format would be offered.
    EmptyFormats,

    #[error("`precision` must be at most {max}, got {found}")]
    /// Precision beyond what the serializers emit.
    PrecisionOutOfRange {
        /// Configured value.
        found: u8,
        /// Largest accepted value.
        max: u8,
    },
}

/// When to write the alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaPolicy {
    /// Only for translucent colors.
    #[default]
    Auto,
    /// Always.
    Always,
    /// Never; translucent colors become opaque.
    Never,
}

impl From<AlphaPolicy> for AlphaMode {
    fn from(policy: AlphaPolicy) -> Self {
        match policy {
            AlphaPolicy::Auto => AlphaMode::Auto,
            AlphaPolicy::Always => AlphaMode::Always,
            AlphaPolicy::Never => AlphaMode::Never,
        }
    }
}

/// Hex digit case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `#aabbcc`.
    #[default]
    Lower,
    /// `#AABBCC`.
    Upper,
}

/// Configuration for [`ConvertColorCommand`](crate::ConvertColorCommand).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Formats offered by the chooser. Always listed in declaration order.
    pub formats: Vec<ColorFormat>,
    /// Alpha emission policy.
    pub alpha: AlphaPolicy,
    /// Hex digit case.
    pub hex_case: HexCase,
    /// Comma-separated `rgb()`/`hsl()` output.
    pub legacy_syntax: bool,
    /// Decimal places for fractional components.
    pub precision: u8,
    /// `source` attached to diagnostics.
    pub diagnostic_source: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            formats: ColorFormat::ALL.to_vec(),
            alpha: AlphaPolicy::Auto,
            hex_case: HexCase::Lower,
            legacy_syntax: true,
            precision: 3,
            diagnostic_source: DEFAULT_DIAGNOSTIC_SOURCE.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Parse and validate a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formats.is_empty() {
            return Err(ConfigError::EmptyFormats);
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange {
                found: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Serializer options derived from this configuration.
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            alpha: self.alpha.into(),
            uppercase_hex: self.hex_case == HexCase::Upper,
            legacy: self.legacy_syntax,
            precision: self.precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ConvertConfig::from_yaml_str("  \n").unwrap(),
            ConvertConfig::default()
        );
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = ConvertConfig::from_yaml_str("hex_case: upper\nformats: [oklch, hex]\n")
            .expect("valid config");
        assert_eq!(config.hex_case, HexCase::Upper);
        assert_eq!(config.formats, vec![ColorFormat::Oklch, ColorFormat::Hex]);
        assert_eq!(config.alpha, AlphaPolicy::Auto);
        assert!(config.legacy_syntax);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            ConvertConfig::from_yaml_str("formats: []"),
            Err(ConfigError::EmptyFormats)
        ));
        assert!(matches!(
            ConvertConfig::from_yaml_str("precision: 9"),
            Err(ConfigError::PrecisionOutOfRange { found: 9, max: 6 })
        ));
    }

    #[test]
    fn test_unknown_fields_and_formats_are_rejected() {
        assert!(matches!(
            ConvertConfig::from_yaml_str("colour: red"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            ConvertConfig::from_yaml_str("formats: [cmyk]"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_serialize_options() {
        let config = ConvertConfig {
            alpha: AlphaPolicy::Never,
            hex_case: HexCase::Upper,
            legacy_syntax: false,
            precision: 2,
            ..ConvertConfig::default()
        };
        let options = config.serialize_options();
        assert_eq!(options.alpha, AlphaMode::Never);
        assert!(options.uppercase_hex);
        assert!(!options.legacy);
        assert_eq!(options.precision, 2);
    }
}
