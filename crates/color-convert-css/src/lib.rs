#![warn(missing_docs)]
//! `color-convert-css` - CSS color literal parsing and serialization.
//!
//! This crate is the color-math layer used by `color-convert`. It stays small and dependency
//! light: it parses hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` and `oklch()` literals into a
//! canonical [`Color`] value, and renders a [`Color`] back into any of those notations.
//!
//! ```
//! use color_convert_css::{Color, SerializeOptions};
//!
//! let color: Color = "rgb(255, 0, 0)".parse().unwrap();
//! let options = SerializeOptions::default();
//! assert_eq!(color.to_hex_string(&options), "#ff0000");
//! assert_eq!(color.to_hsl_string(&options), "hsl(0, 100%, 50%)");
//! ```

pub mod color;
mod error;
pub mod parse;
pub mod render;

pub use color::{Color, Hsl, OkLab, OkLch, normalize_hue};
pub use error::ParseColorError;
pub use parse::parse_color;
pub use render::{AlphaMode, MAX_PRECISION, SerializeOptions, format_number};
