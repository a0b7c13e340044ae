//! Per-fragment attribute bundle and its merge rules

use crate::attr::{Color, Style};

/// Color, background, style and size of a fragment.
///
/// Every field has a sentinel meaning "unset": `Color::None`, the empty
/// style, and size 0. Merging only ever moves set values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attrs {
    pub color: Color,
    pub background: Color,
    pub style: Style,
    pub size: u16,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    /// Take each field of `other` that is set
    pub fn override_with(&mut self, other: Attrs) {
        if !other.color.is_none() {
            self.color = other.color;
        }
        if !other.background.is_none() {
            self.background = other.background;
        }
        if !other.style.is_empty() {
            self.style = other.style;
        }
        if other.size > 0 {
            self.size = other.size;
        }
    }

    /// Fill each field that is still unset from `other`
    pub fn underride_with(&mut self, other: Attrs) {
        if self.color.is_none() {
            self.color = other.color;
        }
        if self.background.is_none() {
            self.background = other.background;
        }
        if self.style.is_empty() {
            self.style = other.style;
        }
        if self.size == 0 {
            self.size = other.size;
        }
    }

    /// Copy of `self` with unset fields filled from `inherited`
    pub fn resolved(mut self, inherited: Attrs) -> Attrs {
        self.underride_with(inherited);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_skips_sentinels() {
        let mut a = Attrs::new().color(Color::Red).style(Style::BOLD).size(3);
        a.override_with(Attrs::new());
        assert_eq!(a, Attrs::new().color(Color::Red).style(Style::BOLD).size(3));

        a.override_with(Attrs::new().color(Color::Blue).background(Color::Grey));
        assert_eq!(a.color, Color::Blue);
        assert_eq!(a.background, Color::Grey);
        assert_eq!(a.style, Style::BOLD);
        assert_eq!(a.size, 3);
    }

    #[test]
    fn test_override_replaces_style_set() {
        let mut a = Attrs::new().style(Style::BOLD | Style::ITALIC);
        a.override_with(Attrs::new().style(Style::UNDERLINE));
        assert_eq!(a.style, Style::UNDERLINE);
    }

    #[test]
    fn test_underride_fills_only_unset() {
        let mut a = Attrs::new().color(Color::Magenta).style(Style::ITALIC);
        a.underride_with(
            Attrs::new()
                .color(Color::Orange)
                .background(Color::Grey)
                .style(Style::BOLD)
                .size(7),
        );
        assert_eq!(a.color, Color::Magenta);
        assert_eq!(a.background, Color::Grey);
        assert_eq!(a.style, Style::ITALIC);
        assert_eq!(a.size, 7);
    }

    #[test]
    fn test_underride_background_keeps_set_value() {
        let mut a = Attrs::new().background(Color::White);
        a.underride_with(Attrs::new().background(Color::Black));
        assert_eq!(a.background, Color::White);
    }
}
