//! Ramp generation — the bridge from a brand hue to concrete shades.
//!
//! Every ramp is one table from [`tables`](crate::tables) run through the
//! same evaluator; the ramp kinds differ only in their working hue and
//! chroma model:
//!
//! | ramp      | working hue                         | chroma                              |
//! |-----------|-------------------------------------|-------------------------------------|
//! | primary   | hue                                 | primitive + w × base                |
//! | secondary | hue + 30                            | primitive + w × base                |
//! | neutral   | hue + 5 (dark) / hue − 3 (light)    | w × neutral                         |
//! | accent    | override, else hue / hue + 30       | w × base × (1 dark, 1.85 light)     |
//!
//! All operations are total. Any `f64`, including NaN and infinities,
//! yields four complete ramps.

use hueramp_color::{ColorValue, Hsl, Oklch, Representation};
use serde::Serialize;
use tracing::debug;

use crate::accent::HueState;
use crate::config::PaletteConfig;
use crate::error::Result;
use crate::hue::{coerce, complementary_hue, normalize_hue};
use crate::mode::ThemeMode;
use crate::ramp::{ColorRamp, RampKind};
use crate::support::color_with_fallback;
use crate::tables::{self, ShadeCoefficients, accent_chroma_multiplier};

/// Neutral hue offsets from the brand hue.
const NEUTRAL_DARK_HUE_OFFSET: f64 = 5.0;
const NEUTRAL_LIGHT_HUE_OFFSET: f64 = -3.0;

/// Lightness of the brand color token.
const BRAND_COLOR_LIGHTNESS: f64 = 87.76;
/// Saturation and lightness of the HSL brand preview swatch.
const BRAND_PREVIEW_SATURATION: f64 = 70.0;
const BRAND_PREVIEW_LIGHTNESS: f64 = 60.0;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The four ramps for one brand hue and theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub theme: ThemeMode,
    pub brand_hue: f64,
    /// Hue the accent ramp was built on.
    pub accent_hue: f64,
    pub primary: ColorRamp,
    pub secondary: ColorRamp,
    pub neutral: ColorRamp,
    pub accent: ColorRamp,
}

impl Palette {
    /// The ramp of a given kind.
    #[must_use]
    pub const fn ramp(&self, kind: RampKind) -> &ColorRamp {
        match kind {
            RampKind::Primary => &self.primary,
            RampKind::Secondary => &self.secondary,
            RampKind::Neutral => &self.neutral,
            RampKind::Accent => &self.accent,
        }
    }

    /// `(kind, ramp)` pairs in token order.
    pub fn ramps(&self) -> impl Iterator<Item = (RampKind, &ColorRamp)> + '_ {
        RampKind::all().iter().map(move |&kind| (kind, self.ramp(kind)))
    }
}

// ---------------------------------------------------------------------------
// PaletteEngine
// ---------------------------------------------------------------------------

/// Stateless ramp generator.
///
/// Holds only the chroma coefficients and the answer of the capability
/// check, so every ramp it produces uses a single representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEngine {
    config: PaletteConfig,
    supports_oklch: bool,
}

impl Default for PaletteEngine {
    /// Default coefficients, OKLCH supported.
    fn default() -> Self {
        Self::new(PaletteConfig::default(), true)
    }
}

impl PaletteEngine {
    /// Engine with an already-known capability answer.
    ///
    /// The config is trusted as given: a NaN or negative coefficient flows
    /// straight into the emitted chroma. Use [`try_new`](Self::try_new) for
    /// a config that has not been through [`PaletteConfig::validate`].
    #[must_use]
    pub const fn new(config: PaletteConfig, supports_oklch: bool) -> Self {
        Self {
            config,
            supports_oklch,
        }
    }

    /// Like [`new`](Self::new), but rejects an invalid config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) for a negative or non-finite
    /// coefficient.
    pub fn try_new(config: PaletteConfig, supports_oklch: bool) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, supports_oklch))
    }

    /// Engine that asks the capability check once, up front.
    #[must_use]
    pub fn detect(config: PaletteConfig, check: impl FnOnce() -> bool) -> Self {
        let supports_oklch = check();
        if !supports_oklch {
            debug!("OKLCH unsupported; ramps fall back to HSL");
        }
        Self::new(config, supports_oklch)
    }

    #[must_use]
    pub const fn config(&self) -> &PaletteConfig {
        &self.config
    }

    #[must_use]
    pub const fn supports_oklch(&self) -> bool {
        self.supports_oklch
    }

    /// The representation every value from this engine uses.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        if self.supports_oklch {
            Representation::Oklch
        } else {
            Representation::Hsl
        }
    }

    // ── Ramps ────────────────────────────────────────────────────────────

    /// Brand ramp: quadratic lightness curve on the brand hue.
    #[must_use]
    pub fn primary_ramp(&self, hue: f64, theme: ThemeMode) -> ColorRamp {
        self.evaluate(RampKind::Primary, theme, normalize_hue(hue))
    }

    /// Ramp on the +30° offset hue.
    #[must_use]
    pub fn secondary_ramp(&self, hue: f64, theme: ThemeMode) -> ColorRamp {
        self.evaluate(RampKind::Secondary, theme, complementary_hue(hue, 0.0))
    }

    /// Near-gray ramp tinted by the brand hue.
    #[must_use]
    pub fn neutral_ramp(&self, hue: f64, theme: ThemeMode) -> ColorRamp {
        self.evaluate(RampKind::Neutral, theme, neutral_hue(hue, theme))
    }

    /// Accent ramp. The override for the active theme wins; the other
    /// theme's override is ignored.
    #[must_use]
    pub fn accent_ramp(
        &self,
        hue: f64,
        theme: ThemeMode,
        dark_override: Option<f64>,
        light_override: Option<f64>,
    ) -> ColorRamp {
        self.evaluate(
            RampKind::Accent,
            theme,
            accent_hue(hue, theme, dark_override, light_override),
        )
    }

    /// Any ramp by kind. Overrides only affect the accent ramp.
    #[must_use]
    pub fn ramp(
        &self,
        kind: RampKind,
        hue: f64,
        theme: ThemeMode,
        dark_override: Option<f64>,
        light_override: Option<f64>,
    ) -> ColorRamp {
        match kind {
            RampKind::Primary => self.primary_ramp(hue, theme),
            RampKind::Secondary => self.secondary_ramp(hue, theme),
            RampKind::Neutral => self.neutral_ramp(hue, theme),
            RampKind::Accent => self.accent_ramp(hue, theme, dark_override, light_override),
        }
    }

    /// All four ramps.
    #[must_use]
    pub fn palette(
        &self,
        hue: f64,
        theme: ThemeMode,
        dark_override: Option<f64>,
        light_override: Option<f64>,
    ) -> Palette {
        let brand_hue = normalize_hue(hue);
        let accent_hue = accent_hue(hue, theme, dark_override, light_override);
        debug!(brand_hue, accent_hue, theme = %theme, representation = %self.representation(), "computing palette");
        Palette {
            theme,
            brand_hue,
            accent_hue,
            primary: self.primary_ramp(hue, theme),
            secondary: self.secondary_ramp(hue, theme),
            neutral: self.neutral_ramp(hue, theme),
            accent: self.accent_ramp(hue, theme, dark_override, light_override),
        }
    }

    /// All four ramps for a [`HueState`], with both accents resolved.
    #[must_use]
    pub fn palette_for(&self, state: &HueState, theme: ThemeMode) -> Palette {
        self.palette(
            state.brand_hue(),
            theme,
            Some(state.dark_accent_hue()),
            Some(state.light_accent_hue()),
        )
    }

    /// The single brand color token for a hue.
    #[must_use]
    pub fn brand_color(&self, hue: f64) -> ColorValue {
        let hue = normalize_hue(hue);
        color_with_fallback(
            Oklch::new(BRAND_COLOR_LIGHTNESS, self.config.base_chroma, hue).into(),
            brand_preview(hue),
            || self.supports_oklch,
        )
    }

    // ── Evaluation ───────────────────────────────────────────────────────

    /// Run one coefficient table at a working hue.
    // Separate multiply and add: a fused mul_add rounds once and changes the
    // last digit of the emitted chroma.
    #[allow(clippy::suboptimal_flops)]
    fn evaluate(&self, kind: RampKind, theme: ThemeMode, hue: f64) -> ColorRamp {
        let table = tables::table(kind, theme);
        let (floor, scale) = self.chroma_model(kind, theme);

        ColorRamp::from_fn(|shade| {
            let row = ShadeCoefficients::of(table, shade);
            let chroma = floor + row.weight * scale;
            color_with_fallback(
                Oklch::new(row.lightness.value(), chroma, hue).into(),
                Hsl::new(hue, row.saturation, row.lightness.legacy()).into(),
                || self.supports_oklch,
            )
        })
    }

    /// `(floor, scale)` such that a shade's chroma is `floor + weight × scale`.
    fn chroma_model(&self, kind: RampKind, theme: ThemeMode) -> (f64, f64) {
        let c = &self.config;
        match kind {
            RampKind::Primary | RampKind::Secondary => (c.primitive_chroma_base, c.base_chroma),
            RampKind::Neutral => (0.0, c.neutral_chroma),
            RampKind::Accent => (0.0, c.base_chroma * accent_chroma_multiplier(theme)),
        }
    }
}

/// Hue preview swatch, always HSL: `hsl(h, 70%, 60%)`.
#[must_use]
pub fn brand_preview(hue: f64) -> ColorValue {
    Hsl::new(normalize_hue(hue), BRAND_PREVIEW_SATURATION, BRAND_PREVIEW_LIGHTNESS).into()
}

/// Working hue of the neutral ramp.
#[must_use]
pub fn neutral_hue(hue: f64, theme: ThemeMode) -> f64 {
    let offset = match theme {
        ThemeMode::Dark => NEUTRAL_DARK_HUE_OFFSET,
        ThemeMode::Light => NEUTRAL_LIGHT_HUE_OFFSET,
    };
    normalize_hue(coerce(hue) + offset)
}

/// Working hue of the accent ramp.
///
/// Dark: the dark override, else the brand hue. Light: the light override,
/// else the brand hue + 30°.
#[must_use]
pub fn accent_hue(
    hue: f64,
    theme: ThemeMode,
    dark_override: Option<f64>,
    light_override: Option<f64>,
) -> f64 {
    match theme {
        ThemeMode::Dark => dark_override.map_or_else(|| normalize_hue(hue), normalize_hue),
        ThemeMode::Light => light_override.map_or_else(|| complementary_hue(hue, 0.0), normalize_hue),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
