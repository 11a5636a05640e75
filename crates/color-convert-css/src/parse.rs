//! Color literal parser.
//!
//! Accepted notations:
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - `rgb()` / `rgba()` in legacy (`rgb(255, 0, 0)`) and modern (`rgb(255 0 0 / 50%)`) syntax
//! - `hsl()` / `hsla()` in legacy and modern syntax, hue with optional `deg|grad|rad|turn` unit
//! - `oklch(L C H)` / `oklch(L C H / A)` (modern syntax only)
//!
//! Function names and hex digits are case-insensitive; surrounding whitespace is ignored.

use crate::color::{Color, Hsl, OkLch, normalize_hue};
use crate::error::ParseColorError;
use std::f64::consts::PI;

/// Reference chroma for `oklch()` percentages: `100%` is `0.4`.
const OKLCH_CHROMA_REFERENCE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    Percentage(f64),
    /// Angle, already converted to degrees.
    Angle(f64),
    None,
}

impl Component {
    fn describe(self) -> &'static str {
        match self {
            Component::Number(_) => "a number",
            Component::Percentage(_) => "a percentage",
            Component::Angle(_) => "an angle",
            Component::None => "'none'",
        }
    }
}

struct Arguments<'a> {
    channels: Vec<&'a str>,
    alpha: Option<&'a str>,
    legacy: bool,
}

impl Arguments<'_> {
    fn count(&self) -> usize {
        self.channels.len() + usize::from(self.alpha.is_some())
    }
}

fn parse_number(token: &str) -> Result<f64, ParseColorError> {
    let starts_numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
    if !starts_numeric {
        return Err(ParseColorError::InvalidComponent(token.to_string()));
    }

    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseColorError::InvalidComponent(token.to_string()))
}

fn parse_component(token: &str) -> Result<Component, ParseColorError> {
    if token == "none" {
        return Ok(Component::None);
    }

    if let Some(number) = token.strip_suffix('%') {
        return parse_number(number).map(Component::Percentage);
    }

    // `grad` must be tried before `rad`.
    const ANGLE_UNITS: [(&str, f64); 4] = [
        ("deg", 1.0),
        ("grad", 0.9),
        ("rad", 180.0 / PI),
        ("turn", 360.0),
    ];
    for (unit, to_degrees) in ANGLE_UNITS {
        if let Some(number) = token.strip_suffix(unit) {
            return parse_number(number).map(|value| Component::Angle(value * to_degrees));
        }
    }

    parse_number(token).map(Component::Number)
}

fn split_arguments(args: &str) -> Result<Arguments<'_>, ParseColorError> {
    if args.contains(',') {
        if args.contains('/') {
            return Err(ParseColorError::MixedSyntax("/"));
        }

        let mut channels = args.split(',').map(str::trim).collect::<Vec<_>>();
        if let Some(empty) = channels.iter().find(|part| part.is_empty()) {
            return Err(ParseColorError::InvalidComponent((*empty).to_string()));
        }
        if channels.contains(&"none") {
            return Err(ParseColorError::MixedSyntax("none"));
        }

        let alpha = if channels.len() == 4 {
            channels.pop()
        } else {
            None
        };

        return Ok(Arguments {
            channels,
            alpha,
            legacy: true,
        });
    }

    let (main, alpha) = match args.split_once('/') {
        Some((main, alpha)) => {
            let alpha = alpha.trim();
            if alpha.is_empty() || alpha.contains('/') || alpha.contains(char::is_whitespace) {
                return Err(ParseColorError::InvalidComponent(alpha.to_string()));
            }
            (main, Some(alpha))
        }
        None => (args, None),
    };

    Ok(Arguments {
        channels: main.split_whitespace().collect(),
        alpha,
        legacy: false,
    })
}

fn expect_three(function: &'static str, args: &Arguments<'_>) -> Result<(), ParseColorError> {
    if args.channels.len() != 3 {
        return Err(ParseColorError::ArgumentCount {
            function,
            expected: "3 or 4",
            found: args.count(),
        });
    }
    Ok(())
}

fn parse_alpha(function: &'static str, token: Option<&str>) -> Result<f64, ParseColorError> {
    let Some(token) = token else {
        return Ok(1.0);
    };

    match parse_component(token)? {
        Component::Number(value) => Ok(value.clamp(0.0, 1.0)),
        Component::Percentage(value) => Ok((value / 100.0).clamp(0.0, 1.0)),
        Component::None => Ok(0.0),
        other => Err(ParseColorError::ComponentType {
            function,
            component: "alpha",
            what: other.describe(),
        }),
    }
}

fn parse_hue(function: &'static str, token: &str) -> Result<f64, ParseColorError> {
    match parse_component(token)? {
        Component::Number(value) | Component::Angle(value) => Ok(normalize_hue(value)),
        Component::None => Ok(0.0),
        other => Err(ParseColorError::ComponentType {
            function,
            component: "hue",
            what: other.describe(),
        }),
    }
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHexDigit(bad));
    }

    // All digits are ASCII past this point.
    let digit = |i: usize| -> u8 {
        let c = hex.as_bytes()[i];
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };
    let short = |i: usize| digit(i) * 17;
    let long = |i: usize| (digit(i) << 4) | digit(i + 1);

    let rgba = match hex.len() {
        3 => [short(0), short(1), short(2), 255],
        4 => [short(0), short(1), short(2), short(3)],
        6 => [long(0), long(2), long(4), 255],
        8 => [long(0), long(2), long(4), long(6)],
        other => return Err(ParseColorError::InvalidHexLength(other)),
    };

    Ok(Color::from_rgba8(rgba))
}

fn parse_rgb(function: &'static str, args: &str) -> Result<Color, ParseColorError> {
    let args = split_arguments(args)?;
    expect_three(function, &args)?;

    const NAMES: [&str; 3] = ["red", "green", "blue"];
    let mut rgb = [0.0; 3];
    for (i, token) in args.channels.iter().enumerate() {
        rgb[i] = match parse_component(token)? {
            Component::Number(value) => value / 255.0,
            Component::Percentage(value) => value / 100.0,
            Component::None => 0.0,
            other => {
                return Err(ParseColorError::ComponentType {
                    function,
                    component: NAMES[i],
                    what: other.describe(),
                });
            }
        }
        .clamp(0.0, 1.0);
    }

    let alpha = parse_alpha(function, args.alpha)?;
    Ok(Color::new(rgb[0], rgb[1], rgb[2], alpha))
}

fn parse_hsl(function: &'static str, args: &str) -> Result<Color, ParseColorError> {
    let args = split_arguments(args)?;
    expect_three(function, &args)?;

    let h = parse_hue(function, args.channels[0])?;

    let mut fractions = [0.0; 2];
    for (i, (token, name)) in args.channels[1..]
        .iter()
        .zip(["saturation", "lightness"])
        .enumerate()
    {
        fractions[i] = match parse_component(token)? {
            Component::Percentage(value) => value / 100.0,
            Component::Number(value) if !args.legacy => value / 100.0,
            Component::None => 0.0,
            other => {
                return Err(ParseColorError::ComponentType {
                    function,
                    component: name,
                    what: other.describe(),
                });
            }
        }
        .clamp(0.0, 1.0);
    }

    let alpha = parse_alpha(function, args.alpha)?;
    Ok(Color::from_hsl(
        Hsl {
            h,
            s: fractions[0],
            l: fractions[1],
        },
        alpha,
    ))
}

fn parse_oklch(args: &str) -> Result<Color, ParseColorError> {
    const FUNCTION: &str = "oklch";

    let args = split_arguments(args)?;
    if args.legacy {
        return Err(ParseColorError::LegacySyntaxUnsupported(FUNCTION));
    }
    expect_three(FUNCTION, &args)?;

    let l = match parse_component(args.channels[0])? {
        Component::Number(value) => value,
        Component::Percentage(value) => value / 100.0,
        Component::None => 0.0,
        other => {
            return Err(ParseColorError::ComponentType {
                function: FUNCTION,
                component: "lightness",
                what: other.describe(),
            });
        }
    }
    .clamp(0.0, 1.0);

    let c = match parse_component(args.channels[1])? {
        Component::Number(value) => value,
        Component::Percentage(value) => value / 100.0 * OKLCH_CHROMA_REFERENCE,
        Component::None => 0.0,
        other => {
            return Err(ParseColorError::ComponentType {
                function: FUNCTION,
                component: "chroma",
                what: other.describe(),
            });
        }
    }
    .max(0.0);

    let h = parse_hue(FUNCTION, args.channels[2])?;
    let alpha = parse_alpha(FUNCTION, args.alpha)?;

    let color = Color::from_oklch(OkLch { l, c, h }, alpha);
    if !is_representable(color) {
        return Err(ParseColorError::OutOfRange {
            function: FUNCTION,
            component: "chroma",
        });
    }
    Ok(color)
}

/// Every channel is finite, in sRGB and after the trip back into OKLCH.
fn is_representable(color: Color) -> bool {
    let lch = color.to_oklch();
    [color.r, color.g, color.b, lch.l, lch.c, lch.h]
        .iter()
        .all(|v| v.is_finite())
}

/// Parse a color literal in any supported notation.
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseColorError::Empty);
    }
    let lower = trimmed.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }

    let Some(open) = lower.find('(') else {
        return Err(ParseColorError::UnknownNotation);
    };
    let name = lower[..open].trim_end();
    let Some(args) = lower[open + 1..].strip_suffix(')') else {
        return Err(ParseColorError::Unterminated);
    };
    if let Some(bad) = args.chars().find(|c| matches!(c, '(' | ')')) {
        return Err(ParseColorError::InvalidComponent(bad.to_string()));
    }

    match name {
        "rgb" => parse_rgb("rgb", args),
        "rgba" => parse_rgb("rgba", args),
        "hsl" => parse_hsl("hsl", args),
        "hsla" => parse_hsl("hsla", args),
        "oklch" => parse_oklch(args),
        _ => Err(ParseColorError::UnknownFunction(name.to_string())),
    }
}

impl Color {
    /// Parse a color literal. See the [module docs](crate::parse) for accepted notations.
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        parse_color(input)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_units() {
        assert_eq!(parse_component("12").unwrap(), Component::Number(12.0));
        assert_eq!(parse_component("50%").unwrap(), Component::Percentage(50.0));
        assert_eq!(parse_component("90deg").unwrap(), Component::Angle(90.0));
        assert_eq!(parse_component("100grad").unwrap(), Component::Angle(90.0));
        assert_eq!(parse_component("0.5turn").unwrap(), Component::Angle(180.0));
        assert_eq!(parse_component("none").unwrap(), Component::None);

        match parse_component("3.14159265358979rad").unwrap() {
            Component::Angle(deg) => assert!((deg - 180.0).abs() < 1e-9),
            other => panic!("unexpected component: {:?}", other),
        }
    }

    #[test]
    fn test_parse_number_rejects_words() {
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("1e400").is_err());
        assert_eq!(parse_number("-.5").unwrap(), -0.5);
    }

    #[test]
    fn test_huge_chroma_is_not_representable() {
        let color = Color::from_oklch(
            OkLch {
                l: 0.5,
                c: 1e200,
                h: 0.0,
            },
            1.0,
        );
        assert!(!is_representable(color));
        assert!(is_representable(Color::from_oklch(
            OkLch {
                l: 0.7,
                c: 0.35,
                h: 150.0,
            },
            1.0,
        )));
    }

    #[test]
    fn test_split_arguments_modern_with_alpha() {
        let args = split_arguments("1 2 3/ 40%").unwrap();
        assert_eq!(args.channels, vec!["1", "2", "3"]);
        assert_eq!(args.alpha, Some("40%"));
        assert!(!args.legacy);
    }

    #[test]
    fn test_split_arguments_legacy_rejects_slash() {
        assert!(matches!(
            split_arguments("1, 2, 3 / 4"),
            Err(ParseColorError::MixedSyntax("/"))
        ));
    }
}
