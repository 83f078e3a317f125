//! Named foreground colors and stream control modifiers

use std::fmt;
use std::str::FromStr;

use termcolor::{Color, ColorSpec};

use crate::error::ColorError;

/// Foreground color, in normal and bright variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BlackBright,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl ColorType {
    /// Look up a base color by name, selecting the bright variant on request
    pub fn from_name(name: &str, bright: bool) -> Result<Self, ColorError> {
        let base = match name.to_ascii_lowercase().as_str() {
            "black" => ColorType::Black,
            "red" => ColorType::Red,
            "green" => ColorType::Green,
            "yellow" => ColorType::Yellow,
            "blue" => ColorType::Blue,
            "magenta" => ColorType::Magenta,
            "cyan" => ColorType::Cyan,
            "white" => ColorType::White,
            _ => return Err(ColorError::unknown_color(name)),
        };
        Ok(if bright { base.bright() } else { base })
    }

    /// The bright variant of this color
    pub fn bright(self) -> Self {
        match self {
            ColorType::Black => ColorType::BlackBright,
            ColorType::Red => ColorType::RedBright,
            ColorType::Green => ColorType::GreenBright,
            ColorType::Yellow => ColorType::YellowBright,
            ColorType::Blue => ColorType::BlueBright,
            ColorType::Magenta => ColorType::MagentaBright,
            ColorType::Cyan => ColorType::CyanBright,
            ColorType::White => ColorType::WhiteBright,
            bright => bright,
        }
    }

    pub fn is_bright(self) -> bool {
        self.bright() == self
    }

    fn base(self) -> Color {
        match self {
            ColorType::Black | ColorType::BlackBright => Color::Black,
            ColorType::Red | ColorType::RedBright => Color::Red,
            ColorType::Green | ColorType::GreenBright => Color::Green,
            ColorType::Yellow | ColorType::YellowBright => Color::Yellow,
            ColorType::Blue | ColorType::BlueBright => Color::Blue,
            ColorType::Magenta | ColorType::MagentaBright => Color::Magenta,
            ColorType::Cyan | ColorType::CyanBright => Color::Cyan,
            ColorType::White | ColorType::WhiteBright => Color::White,
        }
    }

    /// Color specification applied to the sink for this color
    pub fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.base())).set_intense(self.is_bright());
        spec
    }
}

impl FromStr for ColorType {
    type Err = ColorError;

    /// Parses `name` or `+name` (bright), the same form used inside tags
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('+') {
            Some(name) => ColorType::from_name(name, true),
            None => ColorType::from_name(s, false),
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.base() {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            _ => "white",
        };
        if self.is_bright() {
            write!(f, "+{}", name)
        } else {
            f.write_str(name)
        }
    }
}

/// Stream control modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ctrl {
    /// Return to the terminal's default colors
    Reset,
}
