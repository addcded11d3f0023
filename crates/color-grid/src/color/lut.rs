//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs. Pixels are always
//! 8-bit, so a direct 256-entry table replaces any interpolation.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light (0.0..=1.0).
#[inline]
pub fn srgb_to_linear(value: u8) -> f32 {
    SRGB_TO_LINEAR[value as usize]
}
