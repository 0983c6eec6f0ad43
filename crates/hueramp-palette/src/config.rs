//! Chroma coefficients shared by every ramp.
//!
//! The defaults are the tuned values the ramps were designed around. They
//! can be overridden from a TOML file for experimentation:
//!
//! ```toml
//! base_chroma = 0.18
//! neutral_chroma = 0.015
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Chroma of the brand color and scale factor for primary, secondary and
/// accent ramps.
pub const DEFAULT_BASE_CHROMA: f64 = 0.1637;
/// Chroma scale for the near-gray neutral ramp.
pub const DEFAULT_NEUTRAL_CHROMA: f64 = 0.02;
/// Chroma floor added to every primary and secondary shade.
pub const DEFAULT_PRIMITIVE_CHROMA_BASE: f64 = 0.01;

/// Read-only coefficients consulted by every ramp computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub base_chroma: f64,
    pub neutral_chroma: f64,
    pub primitive_chroma_base: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base_chroma: DEFAULT_BASE_CHROMA,
            neutral_chroma: DEFAULT_NEUTRAL_CHROMA,
            primitive_chroma_base: DEFAULT_PRIMITIVE_CHROMA_BASE,
        }
    }
}

impl PaletteConfig {
    /// Parse and validate a config from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseConfig`] for malformed TOML or unknown keys and
    /// [`Error::InvalidConfig`] for negative or non-finite values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::ParseConfig {
            path: None,
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the same
    /// errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&contents).map_err(|e| Error::ParseConfig {
            path: Some(path.to_path_buf()),
            source: e,
        })?;
        config.validate()?;
        info!(
            path = %path.display(),
            base_chroma = config.base_chroma,
            neutral_chroma = config.neutral_chroma,
            primitive_chroma_base = config.primitive_chroma_base,
            "loaded palette config"
        );
        Ok(config)
    }

    /// Check that every coefficient is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_chroma", self.base_chroma),
            ("neutral_chroma", self.neutral_chroma),
            ("primitive_chroma_base", self.primitive_chroma_base),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
