//! Per-shade coefficient tables.
//!
//! These constants were tuned by eye for contrast, not derived from a
//! formula. Every value is reproduced literally; do not "smooth" them.
//!
//! Each row gives the OKLCH lightness (either flat or `base + coeff·origin²`),
//! the chroma weight applied by the ramp's chroma model, and the saturation
//! of the legacy HSL fallback. The fallback's lightness is the row's flat or
//! base lightness.

use crate::mode::ThemeMode;
use crate::ramp::{RampKind, SHADE_COUNT, Shade};

/// Lightness in percent for one shade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lightness {
    /// A literal percentage.
    Flat(f64),
    /// `base + coeff × origin²`; `coeff` is negative on the dark half of
    /// the primary ramp.
    Quadratic { base: f64, coeff: f64, origin: f64 },
}

impl Lightness {
    /// OKLCH lightness in percent.
    // Unfused on purpose: mul_add would change the last emitted digit.
    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Flat(l) => l,
            Self::Quadratic { base, coeff, origin } => base + coeff * (origin * origin),
        }
    }

    /// HSL fallback lightness in percent.
    #[must_use]
    pub const fn legacy(self) -> f64 {
        match self {
            Self::Flat(l) | Self::Quadratic { base: l, .. } => l,
        }
    }
}

/// Coefficients for one shade of one ramp in one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeCoefficients {
    pub lightness: Lightness,
    pub weight: f64,
    pub saturation: f64,
}

/// One row per shade, 50 through 950.
pub type ShadeTable = [ShadeCoefficients; SHADE_COUNT];

impl ShadeCoefficients {
    /// Row for a given shade of a table.
    #[must_use]
    pub const fn of(table: &ShadeTable, shade: Shade) -> Self {
        table[shade.index()]
    }
}

const fn q(base: f64, coeff: f64, origin: f64, weight: f64, saturation: f64) -> ShadeCoefficients {
    ShadeCoefficients {
        lightness: Lightness::Quadratic { base, coeff, origin },
        weight,
        saturation,
    }
}

const fn flat(l: f64, weight: f64, saturation: f64) -> ShadeCoefficients {
    ShadeCoefficients {
        lightness: Lightness::Flat(l),
        weight,
        saturation,
    }
}

/// Lightness of the dark-theme accent at shade 500.
pub const DARK_ACCENT_LIGHTNESS: f64 = 87.76;
/// Lightness of the light-theme accent at shade 500.
pub const LIGHT_ACCENT_LIGHTNESS: f64 = 63.45;

/// Accent chroma multiplier on top of the base chroma, per theme.
#[must_use]
pub const fn accent_chroma_multiplier(theme: ThemeMode) -> f64 {
    match theme {
        ThemeMode::Dark => 1.0,
        ThemeMode::Light => 1.85,
    }
}

// ── Primary ─────────────────────────────────────────────────────────────────

#[rustfmt::skip]
pub const PRIMARY_DARK: ShadeTable = [
    q(99.0,  2.0, 0.6,  0.1, 15.0),
    q(92.0,  3.0, 0.55, 0.2, 25.0),
    q(85.0,  5.0, 0.5,  0.3, 35.0),
    q(75.0,  5.0, 0.45, 0.4, 45.0),
    q(65.0,  5.0, 0.4,  0.5, 55.0),
    q(55.0,  5.0, 0.35, 0.6, 65.0),
    q(45.0, -5.0, 0.3,  0.8, 75.0),
    q(35.0, -5.0, 0.25, 0.7, 70.0),
    q(25.0, -5.0, 0.2,  0.6, 65.0),
    q(20.0, -5.0, 0.15, 0.5, 60.0),
    q(15.0, -5.0, 0.1,  0.4, 55.0),
];

#[rustfmt::skip]
pub const PRIMARY_LIGHT: ShadeTable = [
    q(99.0,   1.0, 0.025, 0.08, 8.0),
    q(95.0,   5.0, 0.1,   0.15, 15.0),
    q(85.0,  15.0, 0.2,   0.35, 35.0),
    q(75.0,  25.0, 0.3,   0.6,  60.0),
    q(65.0,  35.0, 0.4,   0.8,  80.0),
    q(55.0,  45.0, 0.5,   1.1,  90.0),
    q(45.0, -45.0, 0.5,   1.3,  95.0),
    q(35.0, -35.0, 0.4,   1.5,  90.0),
    q(25.0, -25.0, 0.3,   1.7,  85.0),
    q(15.0, -15.0, 0.2,   1.9,  80.0),
    q(10.0, -10.0, 0.1,   2.3,  75.0),
];

// ── Secondary ───────────────────────────────────────────────────────────────

#[rustfmt::skip]
pub const SECONDARY_DARK: ShadeTable = [
    flat(97.0, 0.1, 15.0),
    flat(90.0, 0.2, 25.0),
    flat(82.0, 0.3, 35.0),
    flat(74.0, 0.4, 45.0),
    flat(66.0, 0.5, 55.0),
    flat(58.0, 0.6, 65.0),
    flat(50.0, 0.7, 75.0),
    flat(42.0, 0.6, 70.0),
    flat(34.0, 0.5, 65.0),
    flat(26.0, 0.4, 60.0),
    flat(18.0, 0.3, 55.0),
];

#[rustfmt::skip]
pub const SECONDARY_LIGHT: ShadeTable = [
    flat(98.0, 0.05, 10.0),
    flat(94.0, 0.1,  20.0),
    flat(88.0, 0.2,  30.0),
    flat(82.0, 0.35, 40.0),
    flat(76.0, 0.5,  50.0),
    flat(70.0, 0.7,  60.0),
    flat(58.0, 0.9,  70.0),
    flat(48.0, 0.8,  75.0),
    flat(38.0, 0.7,  80.0),
    flat(28.0, 0.6,  75.0),
    flat(18.0, 0.5,  70.0),
];

// ── Neutral ─────────────────────────────────────────────────────────────────

#[rustfmt::skip]
pub const NEUTRAL_DARK: ShadeTable = [
    flat(95.0, 0.3, 5.0),
    flat(90.0, 0.4, 6.0),
    flat(80.0, 0.5, 7.0),
    flat(70.0, 0.6, 8.0),
    flat(60.0, 0.7, 9.0),
    flat(50.0, 0.8, 10.0),
    flat(40.0, 0.9, 11.0),
    flat(30.0, 1.0, 12.0),
    flat(20.0, 0.9, 11.0),
    flat(15.0, 0.8, 10.0),
    flat(10.0, 0.7, 9.0),
];

#[rustfmt::skip]
pub const NEUTRAL_LIGHT: ShadeTable = [
    flat(99.0, 0.2, 4.0),
    flat(96.0, 0.3, 5.0),
    flat(90.0, 0.4, 6.0),
    flat(82.0, 0.5, 7.0),
    flat(74.0, 0.6, 8.0),
    flat(66.0, 0.7, 9.0),
    flat(58.0, 0.8, 10.0),
    flat(45.0, 0.9, 11.0),
    flat(35.0, 0.8, 10.0),
    flat(25.0, 0.7, 9.0),
    flat(15.0, 0.6, 8.0),
];

// ── Accent ──────────────────────────────────────────────────────────────────

#[rustfmt::skip]
pub const ACCENT_DARK: ShadeTable = [
    flat(96.0, 0.15, 15.0),
    flat(92.0, 0.3,  30.0),
    flat(88.0, 0.5,  50.0),
    flat(84.0, 0.75, 70.0),
    flat(82.0, 0.9,  75.0),
    flat(DARK_ACCENT_LIGHTNESS, 1.0, 80.0),
    flat(80.0, 1.05, 85.0),
    flat(72.0, 0.95, 80.0),
    flat(64.0, 0.85, 75.0),
    flat(56.0, 0.75, 70.0),
    flat(48.0, 0.65, 65.0),
];

#[rustfmt::skip]
pub const ACCENT_LIGHT: ShadeTable = [
    flat(97.0, 0.1,  10.0),
    flat(93.0, 0.2,  20.0),
    flat(87.0, 0.35, 35.0),
    flat(81.0, 0.5,  50.0),
    flat(75.0, 0.7,  70.0),
    flat(LIGHT_ACCENT_LIGHTNESS, 1.0, 80.0),
    flat(72.0, 1.1,  85.0),
    flat(64.0, 1.05, 90.0),
    flat(56.0, 0.95, 85.0),
    flat(48.0, 0.85, 80.0),
    flat(40.0, 0.75, 75.0),
];

/// The table for a ramp kind and theme.
#[must_use]
pub const fn table(kind: RampKind, theme: ThemeMode) -> &'static ShadeTable {
    match (kind, theme) {
        (RampKind::Primary, ThemeMode::Dark) => &PRIMARY_DARK,
        (RampKind::Primary, ThemeMode::Light) => &PRIMARY_LIGHT,
        (RampKind::Secondary, ThemeMode::Dark) => &SECONDARY_DARK,
        (RampKind::Secondary, ThemeMode::Light) => &SECONDARY_LIGHT,
        (RampKind::Neutral, ThemeMode::Dark) => &NEUTRAL_DARK,
        (RampKind::Neutral, ThemeMode::Light) => &NEUTRAL_LIGHT,
        (RampKind::Accent, ThemeMode::Dark) => &ACCENT_DARK,
        (RampKind::Accent, ThemeMode::Light) => &ACCENT_LIGHT,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const THEMES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    #[test]
    fn quadratic_lightness() {
        let l = PRIMARY_DARK[0].lightness;
        assert!((l.value() - 99.72).abs() < 1e-9);
        assert_eq!(l.legacy(), 99.0);
    }

    #[test]
    fn primary_light_swing() {
        assert!((PRIMARY_LIGHT[5].lightness.value() - 66.25).abs() < 1e-9);
        assert!((PRIMARY_LIGHT[6].lightness.value() - 33.75).abs() < 1e-9);
    }

    #[test]
    fn only_primary_is_quadratic() {
        for &kind in RampKind::all() {
            for theme in THEMES {
                let quadratic = table(kind, theme)
                    .iter()
                    .all(|row| matches!(row.lightness, Lightness::Quadratic { .. }));
                assert_eq!(quadratic, kind == RampKind::Primary, "{kind} {theme}");
            }
        }
    }

    #[test]
    fn accent_midpoint_is_pinned() {
        assert_eq!(ACCENT_DARK[Shade::S500.index()].lightness.value(), 87.76);
        assert_eq!(ACCENT_LIGHT[Shade::S500.index()].lightness.value(), 63.45);
        assert_eq!(ACCENT_DARK[Shade::S500.index()].weight, 1.0);
    }

    /// Chroma weights climb from shade 50 to the midtones.
    #[test]
    fn weights_rise_to_midtones() {
        for &kind in RampKind::all() {
            for theme in THEMES {
                let t = table(kind, theme);
                for i in 1..=Shade::S500.index() {
                    assert!(t[i].weight > t[i - 1].weight, "{kind} {theme} shade {}", Shade::ALL[i]);
                }
            }
        }
    }

    #[test]
    fn all_lightness_within_percent_range() {
        for &kind in RampKind::all() {
            for theme in THEMES {
                for row in table(kind, theme) {
                    let l = row.lightness.value();
                    assert!((0.0..=100.0).contains(&l), "{kind} {theme}: {l}");
                    assert!((0.0..=100.0).contains(&row.saturation));
                }
            }
        }
    }

    #[test]
    fn primary_tables_differ_at_500() {
        let dark = ShadeCoefficients::of(&PRIMARY_DARK, Shade::S500).lightness.value();
        let light = ShadeCoefficients::of(&PRIMARY_LIGHT, Shade::S500).lightness.value();
        assert!((dark - light).abs() > 1.0);
    }
}
