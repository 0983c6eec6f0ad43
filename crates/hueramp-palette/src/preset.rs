//! Named brand-hue presets with single-key shortcuts.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Brand hue used on first start and after a reset (turquoise).
pub const DEFAULT_BRAND_HUE: f64 = 176.2;

/// Light-theme accent hue before the first brand hue change.
pub const DEFAULT_LIGHT_ACCENT_HUE: f64 = 319.7;

/// A ready-made brand hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HuePreset {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Turquoise,
}

impl HuePreset {
    /// Brand hue in degrees.
    #[must_use]
    pub const fn hue(self) -> f64 {
        match self {
            Self::Red => 0.0,
            Self::Orange => 30.0,
            Self::Yellow => 60.0,
            Self::Green => 120.0,
            Self::Cyan => 180.0,
            Self::Blue => 240.0,
            Self::Magenta => 300.0,
            Self::Turquoise => DEFAULT_BRAND_HUE,
        }
    }

    /// Shortcut key.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Cyan => 'c',
            Self::Blue => 'b',
            Self::Magenta => 'p',
            Self::Turquoise => 't',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Turquoise => "turquoise",
        }
    }

    /// Look up a preset by shortcut key (case-insensitive).
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::all().iter().find(|p| p.key() == key).copied()
    }

    /// Look up a preset by name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|p| p.name() == lower).copied()
    }

    /// All presets in shortcut order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Red, Self::Orange, Self::Yellow, Self::Green,
            Self::Cyan, Self::Blue, Self::Magenta, Self::Turquoise,
        ]
    }
}

impl fmt::Display for HuePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HuePreset {
    type Err = Error;

    /// Accepts a preset name or its one-letter shortcut.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let by_key = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_key(c),
            _ => None,
        };
        by_key
            .or_else(|| Self::from_name(trimmed))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
