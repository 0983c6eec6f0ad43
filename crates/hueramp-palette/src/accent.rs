//! Brand hue state and the accent-follow policy.
//!
//! Each theme has an accent hue that either follows the brand hue or is
//! pinned by the user. The two states are tracked explicitly: a pinned
//! accent that happens to equal the brand hue stays pinned.
//!
//! When following, the dark accent takes the brand hue itself and the light
//! accent takes [`derive_light_accent_hue`] of it (brand + 60°).
//!
//! A fresh [`HueState`] seeds the light accent at
//! [`DEFAULT_LIGHT_ACCENT_HUE`]; the seed holds until the first brand hue
//! change, after which the accent follows.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::hue::{derive_light_accent_hue, normalize_hue, parse_hue};
use crate::mode::ThemeMode;
use crate::preset::{DEFAULT_BRAND_HUE, DEFAULT_LIGHT_ACCENT_HUE, HuePreset};

// ---------------------------------------------------------------------------
// AccentFollow
// ---------------------------------------------------------------------------

/// Whether an accent tracks the brand hue or holds its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AccentFollow {
    /// Recomputed from the brand hue on every change.
    #[default]
    Following,
    /// Fixed hue in [0, 360), untouched by brand hue changes.
    Pinned(f64),
    /// Starting hue that holds until the next brand hue change, then follows.
    Seeded(f64),
}

impl AccentFollow {
    /// Pin to a hue (normalized).
    #[must_use]
    pub fn pinned(hue: f64) -> Self {
        Self::Pinned(normalize_hue(hue))
    }

    #[must_use]
    pub const fn is_following(self) -> bool {
        matches!(self, Self::Following)
    }

    /// The effective hue, given what a following accent would be.
    #[must_use]
    pub fn resolve(self, following_hue: f64) -> f64 {
        match self {
            Self::Following => normalize_hue(following_hue),
            Self::Pinned(hue) | Self::Seeded(hue) => normalize_hue(hue),
        }
    }

    /// State after a brand hue change: a seed gives way to following.
    #[must_use]
    pub const fn after_brand_change(self) -> Self {
        match self {
            Self::Seeded(_) => Self::Following,
            other => other,
        }
    }
}

impl fmt::Display for AccentFollow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Following => f.write_str("follow"),
            Self::Pinned(hue) | Self::Seeded(hue) => write!(f, "{hue}"),
        }
    }
}

impl FromStr for AccentFollow {
    type Err = Infallible;

    /// `follow`/`following` selects following; anything else is a pinned
    /// hue, parsed with the usual default-to-zero policy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "follow" | "following" => Self::Following,
            other => Self::Pinned(parse_hue(other)),
        })
    }
}

// ---------------------------------------------------------------------------
// HueState
// ---------------------------------------------------------------------------

/// Resolved hues after a brand hue update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueChange {
    pub previous: f64,
    pub current: f64,
    pub dark_accent_hue: f64,
    pub light_accent_hue: f64,
}

/// The brand hue plus the follow state of both theme accents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueState {
    brand_hue: f64,
    dark_accent: AccentFollow,
    light_accent: AccentFollow,
}

impl Default for HueState {
    /// Default brand hue, dark accent following, light accent seeded.
    fn default() -> Self {
        Self::with_accents(
            DEFAULT_BRAND_HUE,
            AccentFollow::Following,
            AccentFollow::Seeded(DEFAULT_LIGHT_ACCENT_HUE),
        )
    }
}

impl HueState {
    /// Brand hue with both accents following.
    #[must_use]
    pub fn new(brand_hue: f64) -> Self {
        Self::with_accents(brand_hue, AccentFollow::Following, AccentFollow::Following)
    }

    #[must_use]
    pub fn with_accents(brand_hue: f64, dark_accent: AccentFollow, light_accent: AccentFollow) -> Self {
        Self {
            brand_hue: normalize_hue(brand_hue),
            dark_accent,
            light_accent,
        }
    }

    #[must_use]
    pub const fn brand_hue(&self) -> f64 {
        self.brand_hue
    }

    #[must_use]
    pub const fn dark_accent(&self) -> AccentFollow {
        self.dark_accent
    }

    #[must_use]
    pub const fn light_accent(&self) -> AccentFollow {
        self.light_accent
    }

    /// Effective dark-theme accent hue.
    #[must_use]
    pub fn dark_accent_hue(&self) -> f64 {
        self.dark_accent.resolve(self.brand_hue)
    }

    /// Effective light-theme accent hue.
    #[must_use]
    pub fn light_accent_hue(&self) -> f64 {
        self.light_accent.resolve(derive_light_accent_hue(self.brand_hue))
    }

    /// Effective accent hue for the given theme.
    #[must_use]
    pub fn accent_hue(&self, theme: ThemeMode) -> f64 {
        match theme {
            ThemeMode::Dark => self.dark_accent_hue(),
            ThemeMode::Light => self.light_accent_hue(),
        }
    }

    /// Move the brand hue. Following and seeded accents move with it; pinned
    /// ones stay.
    pub fn set_brand_hue(&mut self, hue: f64) -> HueChange {
        let previous = self.brand_hue;
        self.brand_hue = normalize_hue(hue);
        self.dark_accent = self.dark_accent.after_brand_change();
        self.light_accent = self.light_accent.after_brand_change();
        let change = HueChange {
            previous,
            current: self.brand_hue,
            dark_accent_hue: self.dark_accent_hue(),
            light_accent_hue: self.light_accent_hue(),
        };
        debug!(
            previous,
            current = change.current,
            dark_accent = %self.dark_accent,
            light_accent = %self.light_accent,
            "brand hue updated"
        );
        change
    }

    /// Back to the default brand hue. Pins are kept.
    pub fn reset(&mut self) -> HueChange {
        self.set_brand_hue(DEFAULT_BRAND_HUE)
    }

    pub fn apply_preset(&mut self, preset: HuePreset) -> HueChange {
        self.set_brand_hue(preset.hue())
    }

    pub const fn set_dark_accent(&mut self, accent: AccentFollow) {
        self.dark_accent = accent;
    }

    pub const fn set_light_accent(&mut self, accent: AccentFollow) {
        self.light_accent = accent;
    }

    pub fn pin_dark_accent(&mut self, hue: f64) {
        self.dark_accent = AccentFollow::pinned(hue);
    }

    pub fn pin_light_accent(&mut self, hue: f64) {
        self.light_accent = AccentFollow::pinned(hue);
    }

    pub fn follow_dark_accent(&mut self) {
        self.dark_accent = AccentFollow::Following;
    }

    pub fn follow_light_accent(&mut self) {
        self.light_accent = AccentFollow::Following;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
