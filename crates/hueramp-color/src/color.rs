// SPDX-License-Identifier: MIT
//
// hueramp color values — OKLCH first, HSL as the legacy fallback.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science and keep the matrix
// formulas readable.
#![allow(clippy::many_single_char_names)]
//
// Palette shades are produced as design tokens, so the canonical output of
// this module is the CSS functional notation (`oklch(58% 0.11 206.2)`,
// `hsl(206.2, 65%, 58%)`). Floats are written with Rust's shortest
// round-trip formatting, which means a value renders exactly as it was
// computed and two equal values always render to identical bytes.
//
// Conversion pipeline (used for hex previews and gamut checks):
//
//   OKLCH → Oklab → Linear sRGB → sRGB
//   HSL   → sRGB

use std::fmt;

use serde::{Serialize, Serializer};

// ─── Representation ──────────────────────────────────────────────────────────

/// Which color notation a value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Perceptual `oklch()` notation (preferred).
    Oklch,
    /// Legacy `hsl()` notation (fallback for environments without OKLCH).
    Hsl,
}

impl Representation {
    /// CSS function name for this representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oklch => "oklch",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in OKLCH space.
///
/// Unlike a normalized 0–1 lightness, `l` is stored as a percentage because
/// that is how ramp tables are written and how the value is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness in percent: 0.0 (black) to 100.0 (white).
    pub l: f64,
    /// Chroma: 0.0 (gray) to ~0.37 (most vivid).
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to sRGB components (0.0–1.0, may be out of gamut).
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        oklch_to_srgb(self.l / 100.0, self.c, self.h)
    }

    /// Whether this color is displayable in sRGB without clipping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = self.to_srgb();
        // Allow for float noise at the gamut boundary.
        let ok = |v: f64| (-1e-9..=1.0 + 1e-9).contains(&v);
        ok(r) && ok(g) && ok(b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the largest in-gamut chroma, keeping lightness and
    /// hue untouched.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo: f64 = 0.0;
        let mut hi: f64 = self.c;

        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({}% {} {})", self.l, self.c, self.h)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in the legacy HSL notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to sRGB components (0.0–1.0).
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        hsl_to_srgb(self.h, self.s / 100.0, self.l / 100.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// One shade of a ramp: exactly one of the two representations.
///
/// `Display` and `Serialize` both produce the CSS string.
///
/// # Examples
///
/// ```
/// use hueramp_color::{ColorValue, Hsl, Oklch};
///
/// let preferred = ColorValue::Oklch(Oklch::new(58.0, 0.11, 206.2));
/// assert_eq!(preferred.to_string(), "oklch(58% 0.11 206.2)");
///
/// let legacy = ColorValue::Hsl(Hsl::new(206.2, 65.0, 58.0));
/// assert_eq!(legacy.to_string(), "hsl(206.2, 65%, 58%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Oklch(Oklch),
    Hsl(Hsl),
}

impl ColorValue {
    /// Which notation this value uses.
    #[must_use]
    pub const fn representation(self) -> Representation {
        match self {
            Self::Oklch(_) => Representation::Oklch,
            Self::Hsl(_) => Representation::Hsl,
        }
    }

    /// Hue angle in degrees, whichever the representation.
    #[must_use]
    pub const fn hue(self) -> f64 {
        match self {
            Self::Oklch(c) => c.h,
            Self::Hsl(c) => c.h,
        }
    }

    /// Lightness in percent, whichever the representation.
    #[must_use]
    pub const fn lightness(self) -> f64 {
        match self {
            Self::Oklch(c) => c.l,
            Self::Hsl(c) => c.l,
        }
    }

    /// The OKLCH triple, if this value is in OKLCH.
    #[must_use]
    pub const fn as_oklch(self) -> Option<Oklch> {
        match self {
            Self::Oklch(c) => Some(c),
            Self::Hsl(_) => None,
        }
    }

    /// The HSL triple, if this value is in HSL.
    #[must_use]
    pub const fn as_hsl(self) -> Option<Hsl> {
        match self {
            Self::Hsl(c) => Some(c),
            Self::Oklch(_) => None,
        }
    }

    /// Convert to sRGB components (0.0–1.0). OKLCH values may fall outside
    /// the gamut; use [`Oklch::to_gamut`] first if that matters.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        match self {
            Self::Oklch(c) => c.to_srgb(),
            Self::Hsl(c) => c.to_srgb(),
        }
    }

    /// Convert to 8-bit sRGB, clamping out-of-gamut components.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = match self {
            Self::Oklch(c) => c.to_gamut().to_srgb(),
            Self::Hsl(c) => c.to_srgb(),
        };
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// `#rrggbb` hex string of the displayed color.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oklch(c) => fmt::Display::fmt(c, f),
            Self::Hsl(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Oklch> for ColorValue {
    fn from(c: Oklch) -> Self {
        Self::Oklch(c)
    }
}

impl From<Hsl> for ColorValue {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_929_3f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert OKLCH (L in 0–1) → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert HSL (s and l in 0–1) → sRGB per CSS Color 4.
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        a.mul_add(-(k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), l)
    };
    (f(0.0), f(8.0), f(4.0))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
