//! Palette struct with nearest-color matching.
//!
//! A [`Palette`] is an ordered list of distinct sRGB colors plus the
//! distance metric used to match pixels against them. Matching is a linear
//! scan; palettes here never exceed a few dozen entries.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::{Oklab, Srgb};

/// Distance metric for palette color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Squared Euclidean distance on the 8-bit sRGB channels.
    ///
    /// This is what classic palette quantizers do and what keeps named
    /// colors predictable: an exact table color always maps to itself.
    #[default]
    Rgb,

    /// Squared Euclidean distance in Oklab space.
    ///
    /// Perceptually more uniform; dark blues and greens separate better.
    Oklab,
}

/// An ordered set of distinct colors with perceptual matching.
///
/// The Oklab form of every entry is computed once at construction so that
/// per-pixel matching only converts the pixel.
///
/// # Example
///
/// ```
/// use color_grid::{Palette, Srgb};
///
/// let colors = [Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)];
/// let palette = Palette::new(&colors).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest(Srgb::from_u8(30, 30, 30)).0, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    srgb: Vec<Srgb>,
    oklab: Vec<Oklab>,
    distance_metric: DistanceMetric,
}

impl Palette {
    /// Largest palette an index grid can address (indices are `u8`).
    pub const MAX_LEN: usize = 256;

    /// Create a new palette from sRGB colors.
    ///
    /// # Errors
    ///
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - more than [`Palette::MAX_LEN`] colors ([`PaletteError::TooManyColors`])
    /// - a color appears twice ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > Self::MAX_LEN {
            return Err(PaletteError::TooManyColors {
                len: colors.len(),
                max: Self::MAX_LEN,
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        let srgb = colors.to_vec();
        let oklab = srgb.iter().map(|&c| Oklab::from(c)).collect();

        Ok(Self {
            srgb,
            oklab,
            distance_metric: DistanceMetric::default(),
        })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// The sRGB color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.srgb[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.srgb
    }

    /// Position of an exact color, if present.
    pub fn index_of(&self, color: Srgb) -> Option<usize> {
        self.srgb.iter().position(|&c| c == color)
    }

    /// Override the distance metric (default [`DistanceMetric::Rgb`]).
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    /// The configured distance metric.
    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.distance_metric
    }

    /// Distance between a pixel and palette entry `idx` under the configured
    /// metric. `pixel_lab` is only read for [`DistanceMetric::Oklab`].
    #[inline]
    fn distance(&self, pixel: Srgb, pixel_lab: Option<Oklab>, idx: usize) -> f32 {
        match (self.distance_metric, pixel_lab) {
            (DistanceMetric::Oklab, Some(lab)) => lab.distance_squared(self.oklab[idx]),
            _ => pixel.distance_squared(self.srgb[idx]) as f32,
        }
    }

    fn pixel_lab(&self, pixel: Srgb) -> Option<Oklab> {
        match self.distance_metric {
            DistanceMetric::Oklab => Some(Oklab::from(pixel)),
            DistanceMetric::Rgb => None,
        }
    }

    /// Find the nearest palette color to `pixel`.
    ///
    /// Returns `(index, distance)`. On equal distances the entry that comes
    /// first in palette order wins.
    #[inline]
    pub fn find_nearest(&self, pixel: Srgb) -> (usize, f32) {
        let pixel_lab = self.pixel_lab(pixel);

        let mut best_idx = 0;
        let mut best_dist = f32::MAX;
        for i in 0..self.srgb.len() {
            let dist = self.distance(pixel, pixel_lab, i);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Like [`find_nearest`](Self::find_nearest), restricted to `candidates`.
    ///
    /// `candidates` must be non-empty, in ascending order, and hold valid
    /// indices; ties resolve to the lowest index.
    pub fn find_nearest_among(&self, pixel: Srgb, candidates: &[usize]) -> (usize, f32) {
        debug_assert!(!candidates.is_empty(), "candidate set must not be empty");
        let pixel_lab = self.pixel_lab(pixel);

        let mut best_idx = candidates[0];
        let mut best_dist = f32::MAX;
        for &i in candidates {
            let dist = self.distance(pixel, pixel_lab, i);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
