//! Text attributes
//!
//! Attributes are independent bits so that several can be active at once.
//! The empty set is `style_none`.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use super::ParseError;

bitflags! {
    /// Text attribute set (bold, italic, ...)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Style: u16 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const BLINK     = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const CROSSED   = 0b0001_0000;
        const INVERTED  = 0b0010_0000;
    }
}

/// Single-bit styles with their names, in ascending bit order
const NAMED: [(Style, &str); 6] = [
    (Style::BOLD, "bold"),
    (Style::ITALIC, "italic"),
    (Style::BLINK, "blink"),
    (Style::UNDERLINE, "underline"),
    (Style::CROSSED, "crossed"),
    (Style::INVERTED, "inverted"),
];

impl Style {
    /// No attribute set
    pub const NONE: Style = Style::empty();

    /// Build a style from raw bits, dropping any bit that is not a known attribute
    pub fn from_raw(bits: u16) -> Self {
        Style::from_bits_truncate(bits)
    }

    /// Split into single-bit styles in ascending bit order.
    /// Bits that are not a known attribute are skipped.
    pub fn decompose(self) -> impl Iterator<Item = Style> {
        let mut bits = (self & Style::all()).bits();
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let rest = bits & (bits - 1);
            let lowest = bits ^ rest;
            bits = rest;
            Some(Style::from_bits_retain(lowest))
        })
    }

    /// Name of a single-bit style, `None` for combinations or the empty set
    pub fn name(self) -> Option<&'static str> {
        NAMED.iter().find(|(s, _)| *s == self).map(|(_, n)| *n)
    }

    fn parse_one(word: &str) -> Result<Style, ParseError> {
        match word.to_lowercase().as_str() {
            "none" => Ok(Style::NONE),
            "strikethrough" | "strike" => Ok(Style::CROSSED),
            "inverse" | "reverse" => Ok(Style::INVERTED),
            name => NAMED
                .iter()
                .find(|(_, n)| *n == name)
                .map(|(s, _)| *s)
                .ok_or_else(|| ParseError::UnknownStyle(word.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decompose().next().is_none() {
            return f.write_str("none");
        }
        let mut first = true;
        for single in self.decompose() {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            f.write_str(single.name().unwrap_or("?"))?;
        }
        Ok(())
    }
}

/// Parses `"bold"`, `"bold|underline"`, `"bold, italic"` or `"bold underline"`
impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == '|' || c == ',' || c == '+' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .try_fold(Style::NONE, |acc, w| Ok(acc | Style::parse_one(w)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_ascending() {
        let s = Style::INVERTED | Style::BOLD | Style::UNDERLINE;
        let parts: Vec<Style> = s.decompose().collect();
        assert_eq!(parts, vec![Style::BOLD, Style::UNDERLINE, Style::INVERTED]);
    }

    #[test]
    fn test_decompose_empty() {
        assert_eq!(Style::NONE.decompose().count(), 0);
    }

    #[test]
    fn test_decompose_skips_unknown_bits() {
        let parts: Vec<Style> = Style::from_bits_retain(0xc1).decompose().collect();
        assert_eq!(parts, vec![Style::BOLD]);
        assert_eq!(Style::from_bits_retain(0x40).decompose().count(), 0);
    }

    #[test]
    fn test_from_raw_drops_unknown_bits() {
        assert_eq!(Style::from_raw(0x41), Style::BOLD);
        assert_eq!(Style::from_raw(0xff00), Style::NONE);
    }

    #[test]
    fn test_parse() {
        assert_eq!("bold".parse::<Style>().unwrap(), Style::BOLD);
        assert_eq!(
            "bold|underline".parse::<Style>().unwrap(),
            Style::BOLD | Style::UNDERLINE
        );
        assert_eq!(
            "italic, strikethrough".parse::<Style>().unwrap(),
            Style::ITALIC | Style::CROSSED
        );
        assert_eq!("none".parse::<Style>().unwrap(), Style::NONE);
        assert_eq!("".parse::<Style>().unwrap(), Style::NONE);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "bold|wavy".parse::<Style>(),
            Err(ParseError::UnknownStyle("wavy".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Style::NONE.to_string(), "none");
        assert_eq!((Style::BLINK | Style::BOLD).to_string(), "bold|blink");
    }
}
