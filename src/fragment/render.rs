//! Fragment rendering
//!
//! Two targets are supported:
//!
//! - **Plain**: leaf text only
//! - **ISO 6429**: SGR escape sequences using the 256-color palette
//!
//! # ISO 6429 output
//!
//! A leaf renders as
//!
//! ```text
//! <style> <fg> <bg> text ESC[0m
//! ```
//!
//! where `<style>` is `ESC[0m` for no style or one `ESC[<n>m` per style bit
//! (ascending), `<fg>` is `ESC[39m` or `ESC[38;5;<idx>m`, and `<bg>` is
//! `ESC[49m` or `ESC[48;5;<idx>m`. A composite renders each child with its
//! unset attributes filled from the composite, then appends one `ESC[0m`.

use std::fmt::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Attrs, Fragment};
use crate::attr::{Color, Palette, ParseError, Style};

/// Control sequence introducer
const CSI: &str = "\x1b[";

/// Full attribute reset
pub const RESET: &str = "\x1b[0m";

/// SGR operation: set foreground from palette (`op + 1` restores the default)
const OP_FG: u16 = 38;
/// SGR operation: set background from palette (`op + 1` restores the default)
const OP_BG: u16 = 48;

/// Rendering target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Text only
    #[default]
    Plain,
    /// ISO 6429 / ANSI SGR escape sequences
    #[serde(alias = "ansi")]
    Iso6429,
}

impl RenderMode {
    fn to_u8(self) -> u8 {
        match self {
            RenderMode::Plain => 0,
            RenderMode::Iso6429 => 1,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            1 => RenderMode::Iso6429,
            _ => RenderMode::Plain,
        }
    }
}

impl FromStr for RenderMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(RenderMode::Plain),
            "iso6429" | "ansi" => Ok(RenderMode::Iso6429),
            _ => Err(ParseError::UnknownRenderMode(s.to_string())),
        }
    }
}

static DEFAULT_MODE: AtomicU8 = AtomicU8::new(0);

/// Select the mode used by [`Fragment::render_default`] and `Display`
pub fn set_default_render_mode(mode: RenderMode) {
    debug!("Default render mode: {:?}", mode);
    DEFAULT_MODE.store(mode.to_u8(), Ordering::Relaxed);
}

/// Mode used by [`Fragment::render_default`] and `Display`
pub fn default_render_mode() -> RenderMode {
    RenderMode::from_u8(DEFAULT_MODE.load(Ordering::Relaxed))
}

impl Fragment {
    /// Render with the process-wide palette
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Plain => self.plain_text(),
            RenderMode::Iso6429 => self.render_with(mode, Palette::global()),
        }
    }

    /// Render with an explicit palette
    pub fn render_with(&self, mode: RenderMode, palette: &Palette) -> String {
        trace!(?mode, "Rendering fragment");
        match mode {
            RenderMode::Plain => self.plain_text(),
            RenderMode::Iso6429 => {
                let mut out = String::new();
                // Writing into a String does not fail
                let _ = self.write_iso6429(&mut out, palette, Attrs::default());
                out
            }
        }
    }

    /// Render with the process-wide default mode
    pub fn render_default(&self) -> String {
        self.render(default_render_mode())
    }

    fn write_iso6429<W: Write>(
        &self,
        out: &mut W,
        palette: &Palette,
        inherited: Attrs,
    ) -> fmt::Result {
        let attrs = self.attrs.resolved(inherited);
        if self.children.is_empty() {
            write_style(out, palette, attrs.style)?;
            write_color(out, palette, attrs.color, OP_FG)?;
            write_color(out, palette, attrs.background, OP_BG)?;
            out.write_str(&self.text)?;
        } else {
            for child in &self.children {
                child.write_iso6429(out, palette, attrs)?;
            }
        }
        out.write_str(RESET)
    }
}

fn write_style<W: Write>(out: &mut W, palette: &Palette, style: Style) -> fmt::Result {
    let style = style & Style::all();
    if style.is_empty() {
        return out.write_str(RESET);
    }
    for code in palette.resolve_style_codes(style) {
        write!(out, "{}{}m", CSI, code)?;
    }
    Ok(())
}

fn write_color<W: Write>(out: &mut W, palette: &Palette, color: Color, op: u16) -> fmt::Result {
    if color.is_none() {
        write!(out, "{}{}m", CSI, op + 1)
    } else {
        write!(out, "{}{};5;{}m", CSI, op, palette.resolve_color_code(color))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match default_render_mode() {
            RenderMode::Plain => f.write_str(&self.plain_text()),
            RenderMode::Iso6429 => self.write_iso6429(f, Palette::global(), Attrs::default()),
        }
    }
}

/// Queue a fragment onto a terminal writer as ISO 6429 output
impl crossterm::Command for Fragment {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        self.write_iso6429(f, Palette::global(), Attrs::default())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "styled fragments require ANSI support",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}
