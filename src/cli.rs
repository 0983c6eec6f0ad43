// SPDX-License-Identifier: MIT
//
// Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hueramp_palette::{AccentFollow, RampKind, ThemeMode};

#[derive(Debug, Parser)]
#[command(
    name = "hueramp",
    version,
    about = "Deterministic OKLCH palette ramps from a single brand hue",
    long_about = "Generate primary, secondary, neutral and accent color ramps \
                  (shades 50-950) from one brand hue, for a light or dark theme.\n\n\
                  Output is CSS color notation (oklch, or hsl with --legacy-color) \
                  or a full set of CSS custom properties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,

    /// TOML file overriding the chroma coefficients.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Emit HSL instead of OKLCH, as for a renderer without OKLCH support.
    #[arg(long = "legacy-color", global = true)]
    pub legacy_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one ramp as `shade value` lines.
    Ramp(RampArgs),

    /// Print every ramp and hue as CSS custom properties.
    Tokens(TokensArgs),

    /// List the brand hue presets.
    Presets,
}

/// Brand hue, theme and accent state shared by every palette command.
#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Brand hue in degrees, or a preset name or key (e.g. `blue`, `b`).
    #[arg(long, value_name = "HUE", allow_hyphen_values = true)]
    pub hue: Option<String>,

    /// Theme the ramps are tuned for.
    #[arg(long, value_name = "THEME", default_value_t = ThemeMode::Light)]
    pub theme: ThemeMode,

    /// Dark-theme accent: `follow` to track the brand hue, or a hue to pin.
    /// Follows when omitted.
    #[arg(long = "dark-accent", value_name = "HUE", allow_hyphen_values = true)]
    pub dark_accent: Option<AccentFollow>,

    /// Light-theme accent: `follow` to track the brand hue (+60°), or a hue to pin.
    /// When omitted it starts at 319.7 and follows once `--hue` is given.
    #[arg(long = "light-accent", value_name = "HUE", allow_hyphen_values = true)]
    pub light_accent: Option<AccentFollow>,
}

#[derive(Debug, Args)]
pub struct RampArgs {
    /// Which ramp to print: primary, secondary, neutral or accent.
    #[arg(value_name = "KIND")]
    pub kind: RampKind,

    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Print the sRGB hex of each shade instead of its CSS notation.
    #[arg(long)]
    pub hex: bool,
}

#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "css")]
    pub format: TokenFormatArg,

    /// CSS selector wrapping the declarations.
    #[arg(long, value_name = "SELECTOR", default_value = ":root")]
    pub selector: String,
}

/// Token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenFormatArg {
    Css,
    Json,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Compact,
    Pretty,
    Json,
}
