// SPDX-License-Identifier: MIT
//
// hueramp — palette ramps and design tokens from a single brand hue.
//
// This is the binary that wires the crates to a command line:
//
//   hueramp-color   → OKLCH / HSL values, CSS notation, sRGB and hex
//   hueramp-palette → hue math, coefficient tables, ramp engine, tokens
//
// Each invocation is one hue-change event: the arguments describe the brand
// hue, theme and accent state, the engine computes the four ramps, and the
// requested view of them is written to stdout.
//
//   args → HueState + ThemeMode → PaletteEngine::palette_for → ramp / tokens → stdout
//
// Logs go to stderr (see logging.rs).

mod cli;
mod commands;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use hueramp_palette::PaletteEngine;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    let engine = PaletteEngine::detect(config, || !cli.legacy_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Ramp(args) => commands::run_ramp(&engine, args, &mut out)?,
        Command::Tokens(args) => commands::run_tokens(&engine, args, &mut out)?,
        Command::Presets => commands::run_presets(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Logging configuration from CLI flags. An explicit -v/-q disables
/// `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        },
        ..LogConfig::default()
    }
}
