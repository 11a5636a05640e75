use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors produced while parsing a color literal.
pub enum ParseColorError {
    #[error("empty color string")]
    /// The input was empty or whitespace only.
    Empty,

    #[error("unknown color notation")]
    /// The input is neither a hex literal nor a supported color function.
    UnknownNotation,

    #[error("unsupported color function '{0}'")]
    /// The input looks like a function call, but not one we understand.
    UnknownFunction(String),

    #[error("missing closing ')'")]
    /// A color function was not terminated.
    Unterminated,

    #[error("invalid hex digit '{0}'")]
    /// A hex literal contains a non-hex character.
    InvalidHexDigit(char),

    #[error("invalid hex length {0} (expected 3, 4, 6 or 8 digits)")]
    /// A hex literal has an unsupported number of digits.
    InvalidHexLength(usize),

    #[error("{function}() expects {expected} components, got {found}")]
    /// A color function received the wrong number of components.
    ArgumentCount {
        /// The color function name.
        function: &'static str,
        /// Human-readable expected count (e.g. `"3 or 4"`).
        expected: &'static str,
        /// The number of components found.
        found: usize,
    },

    #[error("invalid component '{0}'")]
    /// A component is not a number, percentage, angle or `none`.
    InvalidComponent(String),

    #[error("{function}() does not accept {what} for the {component} component")]
    /// A component has a valid shape but the wrong type for its position.
    ComponentType {
        /// The color function name.
        function: &'static str,
        /// Which component (`"red"`, `"hue"`, `"alpha"`, ...).
        component: &'static str,
        /// What was found (`"a percentage"`, `"an angle"`, ...).
        what: &'static str,
    },

    #[error("{function}() {component} is too large to convert")]
    /// A component parses as a number but drives the conversion math past `f64` range.
    OutOfRange {
        /// The color function name.
        function: &'static str,
        /// Which component.
        component: &'static str,
    },

    #[error("comma-separated syntax does not allow '{0}'")]
    /// Legacy (comma) syntax mixed with modern-only tokens such as `/` or `none`.
    MixedSyntax(&'static str),

    #[error("{0}() does not support comma-separated syntax")]
    /// A modern-only color function was written with commas.
    LegacySyntaxUnsupported(&'static str),
}
