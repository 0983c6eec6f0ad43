//! Hue arithmetic — normalization, parsing and accent derivation.
//!
//! Hues are plain `f64` degrees. Nothing here fails: non-numeric or
//! non-finite input is treated as hue 0. That policy lives in exactly two
//! places, [`coerce`] for numbers and [`parse_hue`] for text.

use tracing::warn;

/// Offset from the brand hue to the secondary ramp and the default
/// light-theme accent.
pub const COMPLEMENTARY_OFFSET: f64 = 30.0;

/// Extra offset used when the light accent auto-follows the brand hue.
pub const LIGHT_ACCENT_FOLLOW_OFFSET: f64 = 30.0;

/// Treat anything that is not a finite number as 0.
#[inline]
#[must_use]
pub const fn coerce(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Fold any number into [0, 360) with a non-negative remainder.
///
/// NaN and ±∞ become 0.
#[must_use]
pub fn normalize_hue(value: f64) -> f64 {
    let h = coerce(value).rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if h >= 360.0 { 0.0 } else { h }
}

/// Parse a hue from text, defaulting to 0 for anything unparseable.
///
/// The result is normalized into [0, 360).
#[must_use]
pub fn parse_hue(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => normalize_hue(value),
        _ => {
            warn!(input = text, "hue is not a finite number; using 0");
            0.0
        }
    }
}

/// `(hue + 30 + offset) mod 360`.
///
/// Not a color-theory complement (that would be +180): this is the fixed
/// offset the secondary ramp and light accent are built on.
#[must_use]
pub fn complementary_hue(hue: f64, offset: f64) -> f64 {
    normalize_hue(coerce(hue) + COMPLEMENTARY_OFFSET + coerce(offset))
}

/// The hue a following light-theme accent takes for a given brand hue,
/// i.e. `(brand + 60) mod 360`.
#[must_use]
pub fn derive_light_accent_hue(brand_hue: f64) -> f64 {
    complementary_hue(brand_hue, LIGHT_ACCENT_FOLLOW_OFFSET)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_in_range_is_identity() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(176.2), 176.2);
        assert_eq!(normalize_hue(359.5), 359.5);
    }

    #[test]
    fn normalize_wraps_large() {
        assert!(close(normalize_hue(360.0), 0.0));
        assert!(close(normalize_hue(725.0), 5.0));
    }

    #[test]
    fn normalize_negative_is_mathematical_mod() {
        assert!(close(normalize_hue(-10.0), 350.0));
        assert!(close(normalize_hue(-370.0), 350.0));
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let h = normalize_hue(-1e-20);
        assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn normalize_non_finite_is_zero() {
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
        assert_eq!(normalize_hue(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn parse_valid() {
        assert!(close(parse_hue("176.2"), 176.2));
        assert!(close(parse_hue("  -30 "), 330.0));
        assert!(close(parse_hue("400"), 40.0));
    }

    #[test]
    fn parse_garbage_is_zero() {
        assert_eq!(parse_hue(""), 0.0);
        assert_eq!(parse_hue("teal"), 0.0);
        assert_eq!(parse_hue("NaN"), 0.0);
        assert_eq!(parse_hue("inf"), 0.0);
    }

    #[test]
    fn complementary_adds_thirty() {
        assert_eq!(complementary_hue(0.0, 0.0), 30.0);
        assert!(close(complementary_hue(176.2, 0.0), 206.2));
    }

    #[test]
    fn complementary_wraps_with_offset() {
        assert!(close(complementary_hue(350.0, 30.0), 50.0));
    }

    #[test]
    fn complementary_coerces_non_finite() {
        assert_eq!(complementary_hue(f64::NAN, 0.0), 30.0);
        assert_eq!(complementary_hue(0.0, f64::NAN), 30.0);
    }

    #[test]
    fn light_accent_is_plus_sixty() {
        assert!(close(derive_light_accent_hue(176.2), 236.2));
        assert!(close(derive_light_accent_hue(330.0), 30.0));
    }
}
