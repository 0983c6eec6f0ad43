//! Property-based invariant tests for the palette engine.
//!
//! These hold for any input, including NaN and infinities:
//!
//! 1. Normalized hues land in [0, 360) and are 360-periodic.
//! 2. Every ramp has all 11 shades in one representation.
//! 3. Ramp computation is deterministic.
//! 4. Dark and light primary ramps differ at shade 500.
//! 5. An accent override fixes the accent ramp hue exactly.
//! 6. Pinned accents survive any sequence of brand hue changes.
//! 7. Every shade resolves to a well-formed hex color.

use hueramp_palette::{
    AccentFollow, HueState, PaletteConfig, PaletteEngine, RampKind, Representation, Shade, ThemeMode,
    color_with_fallback, complementary_hue, derive_light_accent_hue, normalize_hue,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Any f64, weighted toward ordinary hues but including the edge values.
fn hue_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1.0e6f64..1.0e6,
        2 => 0.0f64..360.0,
        1 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

fn engine_strategy() -> impl Strategy<Value = PaletteEngine> {
    any::<bool>().prop_map(|oklch| PaletteEngine::new(PaletteConfig::default(), oklch))
}

fn kind_strategy() -> impl Strategy<Value = RampKind> {
    prop::sample::select(RampKind::all().to_vec())
}

/// Distance between two hues around the circle.
fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Hue normalization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalized_hue_in_range(h in hue_strategy()) {
        let n = normalize_hue(h);
        prop_assert!((0.0..360.0).contains(&n), "normalize_hue({}) = {}", h, n);
    }

    #[test]
    fn normalized_hue_is_periodic(h in -1.0e6f64..1.0e6) {
        let d = circular_distance(normalize_hue(h), normalize_hue(h + 360.0));
        prop_assert!(d < 1e-6, "h={}, distance={}", h, d);
    }

    #[test]
    fn derived_hues_in_range(h in hue_strategy(), offset in hue_strategy()) {
        prop_assert!((0.0..360.0).contains(&complementary_hue(h, offset)));
        prop_assert!((0.0..360.0).contains(&derive_light_accent_hue(h)));
    }
}

#[test]
fn complementary_offsets() {
    assert_eq!(complementary_hue(0.0, 0.0), 30.0);
    assert_eq!(complementary_hue(350.0, 30.0), 50.0);
    assert!((derive_light_accent_hue(176.2) - 236.2).abs() < 1e-9);
}

#[test]
fn fallback_selection() {
    assert_eq!(color_with_fallback("a", "b", || true), "a");
    assert_eq!(color_with_fallback("a", "b", || false), "b");
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Ramps are complete and uniform
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ramps_are_complete(
        engine in engine_strategy(),
        kind in kind_strategy(),
        h in hue_strategy(),
        theme in theme_strategy(),
        dark in prop::option::of(hue_strategy()),
        light in prop::option::of(hue_strategy()),
    ) {
        let ramp = engine.ramp(kind, h, theme, dark, light);
        let shades: Vec<Shade> = ramp.iter().map(|(s, _)| s).collect();
        prop_assert_eq!(shades, Shade::ALL.to_vec());

        let expected = engine.representation();
        for (shade, color) in ramp.iter() {
            prop_assert_eq!(color.representation(), expected);
            prop_assert!((0.0..360.0).contains(&color.hue()), "{} {}: hue {}", kind, shade, color.hue());
            prop_assert!(color.lightness().is_finite());
            prop_assert!(ramp.get(shade.key()).is_some());
        }
    }

    #[test]
    fn non_finite_hue_is_red(engine in engine_strategy(), kind in kind_strategy(), theme in theme_strategy()) {
        for h in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let ramp = engine.ramp(kind, h, theme, None, None);
            prop_assert_eq!(ramp, engine.ramp(kind, 0.0, theme, None, None));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ramps_are_idempotent(
        engine in engine_strategy(),
        h in hue_strategy(),
        theme in theme_strategy(),
        dark in prop::option::of(hue_strategy()),
    ) {
        let a = engine.palette(h, theme, dark, None);
        let b = engine.palette(h, theme, dark, None);
        for (kind, ramp) in a.ramps() {
            let first: Vec<String> = ramp.iter().map(|(_, c)| c.to_string()).collect();
            let second: Vec<String> = b.ramp(kind).iter().map(|(_, c)| c.to_string()).collect();
            prop_assert_eq!(first, second);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Theme switch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn themes_differ_at_500(h in hue_strategy()) {
        let engine = PaletteEngine::default();
        let dark = engine.primary_ramp(h, ThemeMode::Dark)[Shade::S500];
        let light = engine.primary_ramp(h, ThemeMode::Light)[Shade::S500];
        prop_assert_ne!(dark.lightness(), light.lightness());
    }

    /// The HSL fallback shares the base lightness at 500 but not the saturation.
    #[test]
    fn fallback_themes_differ_at_500(h in hue_strategy()) {
        let engine = PaletteEngine::new(PaletteConfig::default(), false);
        let dark = engine.primary_ramp(h, ThemeMode::Dark)[Shade::S500];
        let light = engine.primary_ramp(h, ThemeMode::Light)[Shade::S500];
        prop_assert_ne!(dark.to_string(), light.to_string());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Accent overrides
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn light_override_fixes_hue(h in hue_strategy(), over in 0.0f64..360.0) {
        let ramp = PaletteEngine::default().accent_ramp(h, ThemeMode::Light, None, Some(over));
        for (_, color) in ramp.iter() {
            prop_assert_eq!(color.hue(), over);
        }
    }

    #[test]
    fn dark_override_fixes_hue(h in hue_strategy(), over in 0.0f64..360.0) {
        let ramp = PaletteEngine::default().accent_ramp(h, ThemeMode::Dark, Some(over), Some(h));
        for (_, color) in ramp.iter() {
            prop_assert_eq!(color.hue(), over);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Accent-follow state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pins_survive_brand_changes(
        start in hue_strategy(),
        pin in 0.0f64..360.0,
        moves in prop::collection::vec(hue_strategy(), 0..16),
    ) {
        let mut state = HueState::new(start);
        state.pin_dark_accent(pin);
        state.pin_light_accent(pin);
        for hue in moves {
            let change = state.set_brand_hue(hue);
            prop_assert_eq!(change.dark_accent_hue, pin);
            prop_assert_eq!(change.light_accent_hue, pin);
        }
        prop_assert_eq!(state.dark_accent(), AccentFollow::Pinned(pin));
    }

    #[test]
    fn following_accents_track(moves in prop::collection::vec(hue_strategy(), 1..16)) {
        let mut state = HueState::default();
        for hue in moves {
            let change = state.set_brand_hue(hue);
            prop_assert_eq!(change.dark_accent_hue, change.current);
            prop_assert_eq!(change.light_accent_hue, derive_light_accent_hue(change.current));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Hex output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_shade_has_hex(engine in engine_strategy(), h in hue_strategy(), theme in theme_strategy()) {
        let palette = engine.palette(h, theme, None, None);
        for (_, ramp) in palette.ramps() {
            for (_, color) in ramp.iter() {
                let hex = color.to_hex();
                prop_assert_eq!(hex.len(), 7);
                prop_assert!(hex.starts_with('#'));
                prop_assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn representation_matches_capability(oklch in any::<bool>(), h in hue_strategy()) {
        let engine = PaletteEngine::detect(PaletteConfig::default(), || oklch);
        let expected = if oklch { Representation::Oklch } else { Representation::Hsl };
        prop_assert_eq!(engine.brand_color(h).representation(), expected);
    }
}
