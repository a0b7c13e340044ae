//! Attribute model: colors, styles and their terminal codes.
//!
//! - **color**: `Color`, the closed set of named colors
//! - **style**: `Style`, OR-combinable text attribute flags
//! - **palette**: `Palette`, lookup tables from colors/styles to numeric codes

pub mod color;
pub mod palette;
pub mod style;

use thiserror::Error;

pub use color::Color;
pub use palette::{resolve_color_code, resolve_style_codes, Palette};
pub use style::Style;

/// Failure to parse an attribute name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown render mode: {0}")]
    UnknownRenderMode(String),
}
