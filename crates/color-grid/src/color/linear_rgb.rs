//! Linear RGB color type
//!
//! Intermediate step between 8-bit sRGB and Oklab. Only used on the way to
//! perceptual distances.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space (light intensity, 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode through the build-time lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
