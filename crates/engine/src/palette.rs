//! Fixed ten-color display palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of entries in [`PALETTE`].
pub const PALETTE_SIZE: usize = 10;

/// A named display color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    Pink,
    Brown,
}

/// Process-wide palette, in enumeration order.
pub static PALETTE: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Orange,
    Color::Purple,
    Color::Pink,
    Color::Brown,
];

impl Color {
    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first `count` palette entries, or the whole palette when `count` exceeds it.
#[must_use]
pub fn leading(count: usize) -> &'static [Color] {
    PALETTE.get(..count).unwrap_or(&PALETTE)
}
