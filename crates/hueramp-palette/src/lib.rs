//! # hueramp-palette — Hue-Driven Palette Engine
//!
//! Turns one brand hue into four 11-step color ramps (primary, secondary,
//! neutral, accent) for a light or dark theme. The same inputs always give
//! the same ramps; no input is rejected.
//!
//! # Architecture
//!
//! ```text
//! brand hue + ThemeMode (+ accent overrides / HueState)
//!     │
//!     ▼
//! hue.rs:     normalize, +30° offset hue, light-accent derivation
//!     │
//!     ▼
//! tables.rs:  literal per-shade coefficients (lightness, chroma weight, HSL saturation)
//!     │
//!     ▼
//! engine.rs:  evaluate a table at a working hue → ColorRamp
//!     │       (support.rs picks OKLCH or the HSL fallback)
//!     ▼
//! tokens.rs:  flatten a Palette into CSS custom properties
//! ```
//!
//! `accent.rs` tracks whether each theme's accent follows the brand hue or
//! is pinned. `config.rs` holds the chroma coefficients, optionally loaded
//! from TOML.
//!
//! # Color Space
//!
//! Ramps are computed in OKLCH (perceptually uniform). When the capability
//! check says OKLCH cannot be displayed, every shade is emitted as its
//! hand-tuned HSL equivalent instead. The check is asked once per engine,
//! so one ramp never mixes notations.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Exact float comparisons in tests pin literal table values.
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod accent;
pub mod config;
pub mod engine;
pub mod error;
pub mod hue;
pub mod mode;
pub mod preset;
pub mod ramp;
pub mod support;
pub mod tables;
pub mod tokens;

pub use accent::{AccentFollow, HueChange, HueState};
pub use config::PaletteConfig;
pub use engine::{Palette, PaletteEngine};
pub use error::{Error, Result};
pub use hue::{complementary_hue, derive_light_accent_hue, normalize_hue, parse_hue};
pub use mode::ThemeMode;
pub use preset::{DEFAULT_BRAND_HUE, DEFAULT_LIGHT_ACCENT_HUE, HuePreset};
pub use ramp::{ColorRamp, RampKind, Shade};
pub use support::color_with_fallback;
pub use tokens::TokenSet;

pub use hueramp_color::{ColorValue, Hsl, Oklch, Representation};
