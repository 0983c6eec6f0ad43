//! Shade keys, ramp kinds and the 11-step [`ColorRamp`].

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use hueramp_color::{ColorValue, Representation};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// One of the 11 fixed shade keys, lightest intent (50) to darkest (950).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

/// Number of shades in every ramp.
pub const SHADE_COUNT: usize = 11;

impl Shade {
    /// All shades in key order.
    #[rustfmt::skip]
    pub const ALL: [Self; SHADE_COUNT] = [
        Self::S50, Self::S100, Self::S200, Self::S300, Self::S400, Self::S500,
        Self::S600, Self::S700, Self::S800, Self::S900, Self::S950,
    ];

    /// The numeric token key (50, 100, …, 950).
    #[must_use]
    pub const fn key(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Position of this shade within a ramp (0–10).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a shade by its numeric key.
    #[must_use]
    pub fn from_key(key: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// RampKind
// ---------------------------------------------------------------------------

/// The four ramps derived from a brand hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampKind {
    /// The brand hue itself.
    Primary,
    /// Offset hue (+30°).
    Secondary,
    /// Near-gray, faintly tinted by the brand hue.
    Neutral,
    /// Theme-dependent accent, optionally pinned to its own hue.
    Accent,
}

impl RampKind {
    /// Token name of this ramp.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Accent => "accent",
        }
    }

    /// All ramp kinds in token order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Primary, Self::Secondary, Self::Neutral, Self::Accent]
    }
}

impl fmt::Display for RampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RampKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|k| k.name() == lower)
            .copied()
            .ok_or_else(|| Error::UnknownRamp(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ColorRamp
// ---------------------------------------------------------------------------

/// Exactly one color per shade, in shade order.
///
/// A ramp is always complete: it can only be built by supplying a value for
/// every shade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    values: [ColorValue; SHADE_COUNT],
}

impl ColorRamp {
    /// Build a ramp by computing each shade.
    pub fn from_fn(mut f: impl FnMut(Shade) -> ColorValue) -> Self {
        Self {
            values: std::array::from_fn(|i| f(Shade::ALL[i])),
        }
    }

    /// Color for a numeric shade key, if the key is one of the 11.
    #[must_use]
    pub fn get(&self, key: u16) -> Option<ColorValue> {
        Shade::from_key(key).map(|s| self[s])
    }

    /// `(shade, color)` pairs from 50 to 950.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, ColorValue)> + '_ {
        Shade::ALL.iter().copied().zip(self.values.iter().copied())
    }

    /// The notation every shade of this ramp is expressed in.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        self.values[0].representation()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        SHADE_COUNT
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Index<Shade> for ColorRamp {
    type Output = ColorValue;

    fn index(&self, shade: Shade) -> &ColorValue {
        &self.values[shade.index()]
    }
}

impl Serialize for ColorRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SHADE_COUNT))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(&shade.key(), &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hueramp_color::Hsl;
    use pretty_assertions::assert_eq;

    fn gray_ramp() -> ColorRamp {
        ColorRamp::from_fn(|s| ColorValue::Hsl(Hsl::new(0.0, 0.0, f64::from(s.key()) / 10.0)))
    }

    #[test]
    fn shade_keys_in_order() {
        let keys: Vec<u16> = Shade::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
    }

    #[test]
    fn shade_index_matches_position() {
        for (i, shade) in Shade::ALL.iter().enumerate() {
            assert_eq!(shade.index(), i);
        }
    }

    #[test]
    fn shade_from_key() {
        assert_eq!(Shade::from_key(500), Some(Shade::S500));
        assert_eq!(Shade::from_key(550), None);
    }

    #[test]
    fn ramp_kind_parse() {
        assert_eq!("Accent".parse::<RampKind>().unwrap(), RampKind::Accent);
        assert!(matches!("tertiary".parse::<RampKind>(), Err(Error::UnknownRamp(_))));
    }

    #[test]
    fn ramp_lookup_by_key() {
        let ramp = gray_ramp();
        assert_eq!(ramp.get(950).unwrap().lightness(), 95.0);
        assert!(ramp.get(42).is_none());
        assert_eq!(ramp[Shade::S50].lightness(), 5.0);
    }

    #[test]
    fn ramp_iterates_all_shades() {
        let ramp = gray_ramp();
        assert_eq!(ramp.iter().count(), 11);
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp.representation(), Representation::Hsl);
    }

    #[test]
    fn ramp_serializes_as_ordered_map() {
        let json = serde_json::to_string(&gray_ramp()).unwrap();
        assert!(json.starts_with("{\"50\":\"hsl(0, 0%, 5%)\",\"100\":"));
        assert!(json.ends_with("\"950\":\"hsl(0, 0%, 95%)\"}"));
    }
}
