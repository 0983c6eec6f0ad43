//! Error types for configuration loading and name parsing.
//!
//! Palette generation itself never fails; these errors only come from the
//! boundary where configuration files and user-supplied names are read.

use std::path::PathBuf;

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the palette engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("failed to read palette config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys.
    #[error("failed to parse palette config{}: {source}", display_path(.path))]
    ParseConfig {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// A coefficient is negative or not a finite number.
    #[error("invalid value for '{field}': {value} (expected a finite, non-negative number)")]
    InvalidConfig { field: &'static str, value: f64 },

    /// Theme name other than `light` or `dark`.
    #[error("unknown theme '{0}' (expected 'light' or 'dark')")]
    UnknownTheme(String),

    /// Ramp name other than primary, secondary, neutral or accent.
    #[error("unknown ramp '{0}' (expected primary, secondary, neutral or accent)")]
    UnknownRamp(String),

    /// Preset name or shortcut key that does not exist.
    #[error("unknown hue preset '{0}'")]
    UnknownPreset(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[allow(clippy::ref_option)]
fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}
