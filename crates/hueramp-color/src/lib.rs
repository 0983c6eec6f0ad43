// SPDX-License-Identifier: MIT
//
// hueramp-color — color values for the hueramp palette engine.
//
// A ramp shade is either a perceptual OKLCH triple or, when the rendering
// environment cannot display OKLCH, a legacy HSL triple. Both render to the
// CSS functional notation they will be written as, and both can be resolved
// to sRGB for previews and hex output.

pub mod color;

pub use color::{ColorValue, Hsl, Oklch, Representation};
