// SPDX-License-Identifier: MIT
//
// Subcommand implementations. Each writes to the given sink so the output
// can be checked without a terminal.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use hueramp_palette::{
    DEFAULT_BRAND_HUE, HuePreset, HueState, PaletteConfig, PaletteEngine, TokenSet, parse_hue,
};
use tracing::info;

use crate::cli::{PaletteArgs, RampArgs, TokenFormatArg, TokensArgs};

/// Chroma coefficients from `--config`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PaletteConfig> {
    match path {
        Some(path) => PaletteConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PaletteConfig::default()),
    }
}

/// Brand hue from `--hue`: a preset name or key, else a number. Unparseable
/// text becomes 0.
pub fn resolve_hue(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return DEFAULT_BRAND_HUE;
    };
    text.parse::<HuePreset>()
        .map_or_else(|_| parse_hue(text), HuePreset::hue)
}

/// First-load state, then the given accents, then the brand hue change if
/// `--hue` was given.
fn hue_state(args: &PaletteArgs) -> HueState {
    let mut state = HueState::default();
    if let Some(accent) = args.dark_accent {
        state.set_dark_accent(accent);
    }
    if let Some(accent) = args.light_accent {
        state.set_light_accent(accent);
    }
    if let Some(hue) = args.hue.as_deref() {
        state.set_brand_hue(resolve_hue(Some(hue)));
    }
    state
}

pub fn run_ramp(engine: &PaletteEngine, args: &RampArgs, out: &mut impl Write) -> Result<()> {
    let state = hue_state(&args.palette);
    let palette = engine.palette_for(&state, args.palette.theme);
    let ramp = palette.ramp(args.kind);
    info!(kind = %args.kind, brand_hue = palette.brand_hue, theme = %palette.theme, "printing ramp");

    for (shade, color) in ramp.iter() {
        if args.hex {
            writeln!(out, "{shade}\t{}", color.to_hex())?;
        } else {
            writeln!(out, "{shade}\t{color}")?;
        }
    }
    Ok(())
}

pub fn run_tokens(engine: &PaletteEngine, args: &TokensArgs, out: &mut impl Write) -> Result<()> {
    let state = hue_state(&args.palette);
    let palette = engine.palette_for(&state, args.palette.theme);
    let tokens = TokenSet::from_palette(&palette, &state, engine);
    info!(count = tokens.len(), format = ?args.format, "printing tokens");

    match args.format {
        TokenFormatArg::Css => out.write_all(tokens.to_css(&args.selector).as_bytes())?,
        TokenFormatArg::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens).context("failed to encode tokens")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn run_presets(out: &mut impl Write) -> Result<()> {
    for preset in HuePreset::all() {
        writeln!(out, "{}\t{:<10}\t{}", preset.key(), preset.name(), preset.hue())?;
    }
    Ok(())
}
