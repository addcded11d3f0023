//! Palette reduction: pick the working subset of the table.

use super::count::ColorCount;
use crate::color::Srgb;
use crate::palette::Palette;

/// How the working subset of the table is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionStrategy {
    /// Keep the entries covering the most pixels.
    ///
    /// Every pixel is first matched against the full table; the `K` entries
    /// with the highest pixel counts survive, ties going to the earlier
    /// table entry. Entries no pixel maps to are never selected.
    #[default]
    MaxCoverage,
    /// Keep the first `K` table entries regardless of the image.
    TablePrefix,
}

/// Selects which palette entries a reduced sheet may use.
///
/// ```
/// use color_grid::{ColorCount, ColorTable, PaletteReducer, ReductionStrategy, Srgb};
///
/// let table = ColorTable::standard();
/// let reducer = PaletteReducer::new(ReductionStrategy::TablePrefix);
/// let selected = reducer.select(table.palette(), &[], ColorCount::new(3).unwrap());
/// assert_eq!(selected, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteReducer {
    strategy: ReductionStrategy,
}

impl PaletteReducer {
    pub fn new(strategy: ReductionStrategy) -> Self {
        Self { strategy }
    }

    #[inline]
    pub fn strategy(&self) -> ReductionStrategy {
        self.strategy
    }

    /// Return the selected palette indices in ascending order.
    ///
    /// The result is never empty and never longer than `count`. When `count`
    /// covers the whole palette every index is returned.
    pub fn select(&self, palette: &Palette, pixels: &[Srgb], count: ColorCount) -> Vec<usize> {
        let k = count.get();
        if k >= palette.len() {
            return (0..palette.len()).collect();
        }

        match self.strategy {
            ReductionStrategy::TablePrefix => (0..k).collect(),
            ReductionStrategy::MaxCoverage => {
                let coverage = coverage(palette, pixels);
                let mut used: Vec<usize> =
                    (0..palette.len()).filter(|&i| coverage[i] > 0).collect();
                if used.is_empty() {
                    return (0..k).collect();
                }
                // Stable sort keeps table order among equal counts
                used.sort_by(|&a, &b| coverage[b].cmp(&coverage[a]));
                used.truncate(k);
                used.sort_unstable();
                used
            }
        }
    }
}

/// Pixel count per palette entry when matching against the full palette.
pub fn coverage(palette: &Palette, pixels: &[Srgb]) -> Vec<usize> {
    let mut counts = vec![0usize; palette.len()];
    for &pixel in pixels {
        let (idx, _) = palette.find_nearest(pixel);
        counts[idx] += 1;
    }
    counts
}
