//! Serialization of [`Color`] values into CSS notations.

use crate::color::Color;

/// Highest number of decimal places emitted for fractional components.
pub const MAX_PRECISION: u8 = 6;

/// When to emit the alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Emit alpha only if the color is not fully opaque (after rounding).
    #[default]
    Auto,
    /// Always emit alpha, even for opaque colors.
    Always,
    /// Never emit alpha; translucent colors are written as opaque.
    Never,
}

/// Options shared by every serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Alpha emission policy.
    pub alpha: AlphaMode,
    /// Use `#AABBCC` instead of `#aabbcc`.
    pub uppercase_hex: bool,
    /// Use comma-separated `rgb(1, 2, 3)` / `rgba(...)` instead of `rgb(1 2 3 / a)`.
    ///
    /// `oklch()` has no legacy form and ignores this flag.
    pub legacy: bool,
    /// Decimal places for fractional components (clamped to [`MAX_PRECISION`]).
    pub precision: u8,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            alpha: AlphaMode::Auto,
            uppercase_hex: false,
            legacy: true,
            precision: 3,
        }
    }
}

/// Format `value` with at most `precision` decimals, trimming trailing zeros.
///
/// ```
/// use color_convert_css::format_number;
///
/// assert_eq!(format_number(0.5, 3), "0.5");
/// assert_eq!(format_number(209.88235, 3), "209.882");
/// assert_eq!(format_number(-0.0001, 3), "0");
/// ```
pub fn format_number(value: f64, precision: u8) -> String {
    let precision = usize::from(precision.min(MAX_PRECISION));
    let mut out = format!("{value:.precision$}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

fn format_hue(degrees: f64, precision: u8) -> String {
    let hue = format_number(degrees, precision);
    // 359.9999 rounds up to a full turn.
    if hue == "360" { "0".to_string() } else { hue }
}

fn format_percentage(fraction: f64, precision: u8) -> String {
    format!("{}%", format_number(fraction * 100.0, precision))
}

impl SerializeOptions {
    fn alpha_text(&self, alpha: f64) -> Option<String> {
        let text = format_number(alpha.clamp(0.0, 1.0), self.precision);
        match self.alpha {
            AlphaMode::Auto if text == "1" => None,
            AlphaMode::Auto | AlphaMode::Always => Some(text),
            AlphaMode::Never => None,
        }
    }

    fn function(&self, name: &str, components: [String; 3], alpha: Option<String>) -> String {
        let [a, b, c] = components;
        match (self.legacy, alpha) {
            (true, Some(alpha)) => format!("{name}a({a}, {b}, {c}, {alpha})"),
            (true, None) => format!("{name}({a}, {b}, {c})"),
            (false, Some(alpha)) => format!("{name}({a} {b} {c} / {alpha})"),
            (false, None) => format!("{name}({a} {b} {c})"),
        }
    }
}

impl Color {
    /// Serialize as `#rrggbb` / `#rrggbbaa` after clamping into the sRGB gamut.
    pub fn to_hex_string(self, options: &SerializeOptions) -> String {
        let [r, g, b, a] = self.to_rgba8();
        let with_alpha = match options.alpha {
            AlphaMode::Auto => a < 255,
            AlphaMode::Always => true,
            AlphaMode::Never => false,
        };

        let out = if with_alpha {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        };

        if options.uppercase_hex {
            out.to_ascii_uppercase()
        } else {
            out
        }
    }

    /// Serialize as `rgb()` / `rgba()` with 8-bit integer channels, clamped into the sRGB gamut.
    pub fn to_rgb_string(self, options: &SerializeOptions) -> String {
        let [r, g, b, _] = self.to_rgba8();
        let alpha = options.alpha_text(self.alpha);
        options.function(
            "rgb",
            [r.to_string(), g.to_string(), b.to_string()],
            alpha,
        )
    }

    /// Serialize as `hsl()` / `hsla()`, clamped into the sRGB gamut.
    pub fn to_hsl_string(self, options: &SerializeOptions) -> String {
        let hsl = self.to_hsl();
        let alpha = options.alpha_text(self.alpha);
        options.function(
            "hsl",
            [
                format_hue(hsl.h, options.precision),
                format_percentage(hsl.s, options.precision),
                format_percentage(hsl.l, options.precision),
            ],
            alpha,
        )
    }

    /// Serialize as `oklch(L C H)` / `oklch(L C H / A)`. No gamut mapping is applied.
    pub fn to_oklch_string(self, options: &SerializeOptions) -> String {
        let lch = self.to_oklch();
        let l = format_number(lch.l, options.precision);
        let c = format_number(lch.c, options.precision);
        // Hue is meaningless once chroma rounds away.
        let h = if c == "0" {
            "0".to_string()
        } else {
            format_hue(lch.h, options.precision)
        };

        match options.alpha_text(self.alpha) {
            Some(alpha) => format!("oklch({l} {c} {h} / {alpha})"),
            None => format!("oklch({l} {c} {h})"),
        }
    }
}
