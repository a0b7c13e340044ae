//! Color and style code tables
//!
//! A [`Palette`] maps every [`Color`] to a 256-color palette index and every
//! single [`Style`] bit to its SGR parameter. Palettes are plain values: build
//! one, adjust it, then either pass it by reference to the renderer or
//! install it as the process-wide palette before the first styled render.

use std::sync::OnceLock;

use tracing::debug;

use super::{Color, Style};

/// Number of distinct style bits
const STYLE_BITS: usize = 6;

/// Default palette indices, in `Color` order
const COLOR_DATA: [(Color, u16); Color::COUNT] = [
    (Color::None, 0),
    (Color::Black, 232),
    (Color::Red, 9),
    (Color::Green, 40),
    (Color::Yellow, 11),
    (Color::Blue, 20),
    (Color::Magenta, 90),
    (Color::Cyan, 14),
    (Color::White, 15),
    (Color::Grey, 244),
    (Color::DeepBlue, 20),
    (Color::MidBlue, 27),
    (Color::Orange, 208),
    (Color::Pink, 201),
    (Color::Brown, 1),
];

/// Default SGR parameters per style bit
const STYLE_DATA: [(Style, u16); STYLE_BITS] = [
    (Style::BOLD, 1),
    (Style::ITALIC, 3),
    (Style::BLINK, 5),
    (Style::UNDERLINE, 4),
    (Style::CROSSED, 9),
    (Style::INVERTED, 7),
];

static GLOBAL: OnceLock<Palette> = OnceLock::new();

/// Lookup tables from symbolic attributes to terminal codes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [u16; Color::COUNT],
    styles: [u16; STYLE_BITS],
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [0; Color::COUNT];
        for (color, code) in COLOR_DATA {
            colors[color.index()] = code;
        }
        let mut styles = [0; STYLE_BITS];
        for (style, code) in STYLE_DATA {
            styles[style_slot(style)] = code;
        }
        Self { colors, styles }
    }
}

impl Palette {
    /// The process-wide palette, built with defaults on first use unless
    /// [`Palette::install`] ran earlier
    pub fn global() -> &'static Palette {
        GLOBAL.get_or_init(|| {
            debug!("Building default palette");
            Palette::default()
        })
    }

    /// Install `self` as the process-wide palette.
    ///
    /// Fails, handing the palette back, if the global palette was already
    /// built (explicitly or by a styled render).
    pub fn install(self) -> Result<(), Palette> {
        GLOBAL.set(self)?;
        debug!("Installed custom palette");
        Ok(())
    }

    /// Palette index for a color. `Color::None` has no meaningful code;
    /// callers emit the "default color" sequence for it instead.
    pub fn resolve_color_code(&self, color: Color) -> u16 {
        self.colors[color.index()]
    }

    /// SGR parameters for every bit of `style`, in ascending bit order.
    /// The empty style yields no codes.
    pub fn resolve_style_codes(&self, style: Style) -> Vec<u16> {
        style
            .decompose()
            .map(|single| self.styles[style_slot(single)])
            .collect()
    }

    /// Replace the palette index of one color. Ignored for `Color::None`.
    pub fn set_color_code(&mut self, color: Color, code: u16) -> &mut Self {
        if !color.is_none() {
            self.colors[color.index()] = code;
        }
        self
    }

    /// Replace the SGR parameter of every bit in `style`
    pub fn set_style_code(&mut self, style: Style, code: u16) -> &mut Self {
        for single in style.decompose() {
            self.styles[style_slot(single)] = code;
        }
        self
    }
}

/// Table slot of a single-bit style (its bit position)
fn style_slot(style: Style) -> usize {
    style.bits().trailing_zeros() as usize
}

/// Palette index of `color` in the process-wide palette
pub fn resolve_color_code(color: Color) -> u16 {
    Palette::global().resolve_color_code(color)
}

/// SGR parameters of `style` in the process-wide palette
pub fn resolve_style_codes(style: Style) -> Vec<u16> {
    Palette::global().resolve_style_codes(style)
}
