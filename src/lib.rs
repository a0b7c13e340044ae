//! styled-text - Styled text fragments for terminal output
//!
//! Text is represented as a tree of [`Fragment`]s, each carrying an optional
//! color, background color, style and size hint. A tree renders either to
//! plain text or to ISO 6429 (ANSI SGR) escape sequences using the 256-color
//! palette.
//!
//! # Features
//!
//! - **Fragment trees**: leaves hold text, composites hold children
//! - **Override / underride**: force-set or fill-in attribute merging
//! - **Inheritance**: children take unset attributes from their parent when rendered
//! - **Configurable palette**: per-color and per-style code overrides from TOML
//!
//! # Quick Start
//!
//! ```
//! use styled_text::{Color, Fragment, RenderMode, Style};
//!
//! let mut line = Fragment::new("error: ").with_color(Color::Red).with_style(Style::BOLD);
//! line.append_fragment(Fragment::new("file not found"));
//!
//! assert_eq!(line.plain_text(), "error: file not found");
//! assert!(line.render(RenderMode::Iso6429).starts_with("\x1b[1m\x1b[38;5;9m"));
//! ```
//!
//! # Module Hierarchy
//!
//! ```text
//! attr/         - Color, Style, Palette (attribute -> terminal code tables)
//! fragment/     - Fragment tree, Attrs merging, rendering
//! config.rs     - TOML configuration
//! ```

pub mod attr;
pub mod config;
pub mod fragment;

pub use attr::{resolve_color_code, resolve_style_codes, Color, Palette, ParseError, Style};
pub use config::{Config, ConfigError, RenderSetting};
pub use fragment::{default_render_mode, set_default_render_mode, Attrs, Fragment, RenderMode};
