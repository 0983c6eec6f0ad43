//! Design tokens — a palette flattened into CSS custom properties.
//!
//! Token names:
//!
//! ```text
//! --p-primary-50 … --p-primary-950      (likewise secondary, neutral, accent)
//! --brand-hue                           brand hue in degrees
//! --brand-color                         oklch(87.76% <base chroma> h), hsl fallback
//! --current-hue-color                   hsl(h, 70%, 60%)
//! --p-accent-hue, --accent-hue          accent hue of the active theme
//! --accent-hue-dark, --accent-hue-light both themes' accent hues
//! ```

use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::accent::HueState;
use crate::engine::{Palette, PaletteEngine, brand_preview};

/// Ordered `(name, value)` custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSet {
    tokens: Vec<(String, String)>,
}

impl TokenSet {
    /// Flatten a palette plus the hue state it was built from.
    ///
    /// `--p-accent-hue` and `--accent-hue` come from the palette, so they
    /// always match the accent ramp actually emitted.
    #[must_use]
    pub fn from_palette(palette: &Palette, state: &HueState, engine: &PaletteEngine) -> Self {
        let mut set = Self::default();

        for (kind, ramp) in palette.ramps() {
            for (shade, color) in ramp.iter() {
                set.push(format!("--p-{kind}-{shade}"), color.to_string());
            }
        }

        let brand = palette.brand_hue;
        set.push("--brand-hue", brand.to_string());
        set.push("--brand-color", engine.brand_color(brand).to_string());
        set.push("--current-hue-color", brand_preview(brand).to_string());
        set.push("--p-accent-hue", palette.accent_hue.to_string());
        set.push("--accent-hue", palette.accent_hue.to_string());
        set.push("--accent-hue-dark", state.dark_accent_hue().to_string());
        set.push("--accent-hue-light", state.light_accent_hue().to_string());
        set
    }

    fn push(&mut self, name: impl Into<String>, value: String) {
        self.tokens.push((name.into(), value));
    }

    /// Value of a token by full name (including the leading `--`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render as a CSS rule block.
    ///
    /// ```text
    /// :root {
    ///   --p-primary-50: oklch(99.72% 0.02637 176.2);
    ///   ...
    /// }
    /// ```
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::with_capacity(self.tokens.len() * 40);
        css.push_str(selector);
        css.push_str(" {\n");
        for (name, value) in &self.tokens {
            // Writing to a String cannot fail.
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for (name, value) in &self.tokens {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaletteConfig;
    use crate::mode::ThemeMode;
    use pretty_assertions::assert_eq;

    fn default_tokens(theme: ThemeMode) -> TokenSet {
        let engine = PaletteEngine::default();
        let state = HueState::default();
        let palette = engine.palette_for(&state, theme);
        TokenSet::from_palette(&palette, &state, &engine)
    }

    #[test]
    fn every_shade_of_every_ramp() {
        let tokens = default_tokens(ThemeMode::Dark);
        assert_eq!(tokens.len(), 4 * 11 + 7);
        assert!(tokens.get("--p-primary-50").is_some());
        assert!(tokens.get("--p-neutral-950").is_some());
        assert!(tokens.get("--p-accent-550").is_none());
    }

    #[test]
    fn ramp_tokens_come_first_in_order() {
        let tokens = default_tokens(ThemeMode::Light);
        let names: Vec<&str> = tokens.iter().map(|(n, _)| n).take(3).collect();
        assert_eq!(names, vec!["--p-primary-50", "--p-primary-100", "--p-primary-200"]);
    }

    #[test]
    fn hue_tokens() {
        let tokens = default_tokens(ThemeMode::Dark);
        assert_eq!(tokens.get("--brand-hue"), Some("176.2"));
        assert_eq!(tokens.get("--brand-color"), Some("oklch(87.76% 0.1637 176.2)"));
        assert_eq!(tokens.get("--current-hue-color"), Some("hsl(176.2, 70%, 60%)"));
        assert_eq!(tokens.get("--accent-hue"), Some("176.2"));
        assert_eq!(tokens.get("--p-accent-hue"), tokens.get("--accent-hue"));
        assert_eq!(tokens.get("--accent-hue-dark"), Some("176.2"));
        assert_eq!(tokens.get("--p-accent-500"), Some("oklch(87.76% 0.1637 176.2)"));
        assert_eq!(tokens.get("--accent-hue-light"), Some("319.7"));
    }

    #[test]
    fn first_load_light_accent_is_seeded() {
        let tokens = default_tokens(ThemeMode::Light);
        assert_eq!(tokens.get("--accent-hue"), Some("319.7"));
        assert_eq!(tokens.get("--p-accent-500"), Some("oklch(63.45% 0.30284500000000003 319.7)"));
    }

    #[test]
    fn pinned_light_accent() {
        let engine = PaletteEngine::default();
        let mut state = HueState::new(10.0);
        state.pin_light_accent(300.0);
        let palette = engine.palette_for(&state, ThemeMode::Light);
        let tokens = TokenSet::from_palette(&palette, &state, &engine);
        assert_eq!(tokens.get("--accent-hue"), Some("300"));
        assert_eq!(tokens.get("--accent-hue-light"), Some("300"));
        assert_eq!(tokens.get("--accent-hue-dark"), Some("10"));
    }

    #[test]
    fn legacy_engine_brand_color() {
        let engine = PaletteEngine::new(PaletteConfig::default(), false);
        let state = HueState::new(200.0);
        let palette = engine.palette_for(&state, ThemeMode::Dark);
        let tokens = TokenSet::from_palette(&palette, &state, &engine);
        assert_eq!(tokens.get("--brand-color"), Some("hsl(200, 70%, 60%)"));
        assert_eq!(tokens.get("--p-primary-50"), Some("hsl(200, 15%, 99%)"));
    }

    #[test]
    fn css_block() {
        let css = default_tokens(ThemeMode::Dark).to_css(":root");
        assert!(css.starts_with(":root {\n  --p-primary-50: oklch("));
        assert!(css.contains("  --brand-hue: 176.2;\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.lines().count(), 4 * 11 + 7 + 2);
    }

    #[test]
    fn json_keeps_order() {
        let json = serde_json::to_string(&default_tokens(ThemeMode::Dark)).unwrap();
        assert!(json.starts_with(r#"{"--p-primary-50":"oklch("#));
        let light = json.find("--accent-hue-light").unwrap();
        let dark = json.find("--accent-hue-dark").unwrap();
        assert!(dark < light);
    }
}
