//! The eight basic SGR colors. Every terminal tlog targets understands them,
//! and each level needs at most a foreground and a background.

use std::fmt;

/// Basic ANSI palette, in SGR order (`30 + index` for foreground, `40 + index` for background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// SGR parameter for this color as foreground.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// SGR parameter for this color as background.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        40 + self as u8
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";
}

/// Foreground plus optional background, the unit a level maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Style {
    #[must_use]
    pub const fn fg(fg: Color) -> Self {
        Self { fg, bg: None }
    }

    #[must_use]
    pub const fn on(fg: Color, bg: Color) -> Self {
        Self { fg, bg: Some(bg) }
    }

    /// Start sequence: foreground escape, then background escape if any.
    #[must_use]
    pub fn ansi(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.fg.fg_code())?;
        if let Some(bg) = self.bg {
            write!(f, "\x1b[{}m", bg.bg_code())?;
        }
        Ok(())
    }
}
