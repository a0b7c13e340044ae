//! Named colors
//!
//! The closed set of colors a fragment can carry. `Color::None` is the
//! "unset / inherit" sentinel.

use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Color of a fragment's foreground or background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Unset, inherits from the parent when rendered
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    DeepBlue,
    MidBlue,
    Orange,
    Pink,
    Brown,
}

impl Color {
    /// Every color, sentinel first, in table order
    pub const ALL: [Color; 15] = [
        Color::None,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Grey,
        Color::DeepBlue,
        Color::MidBlue,
        Color::Orange,
        Color::Pink,
        Color::Brown,
    ];

    /// Number of entries in a color table
    pub const COUNT: usize = Self::ALL.len();

    pub fn is_none(self) -> bool {
        self == Color::None
    }

    /// Position of this color in a color table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Grey => "grey",
            Color::DeepBlue => "deep_blue",
            Color::MidBlue => "mid_blue",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Brown => "brown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('-', "_");
        match name.as_str() {
            "" | "none" => Ok(Color::None),
            "gray" => Ok(Color::Grey),
            _ => Color::ALL
                .iter()
                .copied()
                .find(|c| c.name() == name)
                .ok_or_else(|| ParseError::UnknownColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Deep-Blue".parse::<Color>().unwrap(), Color::DeepBlue);
        assert_eq!("gray".parse::<Color>().unwrap(), Color::Grey);
        assert_eq!("".parse::<Color>().unwrap(), Color::None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ParseError::UnknownColor("chartreuse".to_string()))
        );
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }
}
