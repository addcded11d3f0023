//! The named color table.
//!
//! Coloring sheets use a fixed, ordered set of everyday color names so that a
//! child can find the right pencil. Index 0 is white and doubles as the
//! background: background cells are left blank on the sheets.

use super::error::PaletteError;
use super::palette::{DistanceMetric, Palette};
use crate::color::Srgb;

/// Largest number of entries a named color table may hold.
pub const MAX_TABLE_LEN: usize = 32;

/// The standard 32 colors, in table order, with their CSS color values.
const STANDARD_COLORS: [(&str, Srgb); MAX_TABLE_LEN] = [
    ("White", Srgb::from_u8(0xFF, 0xFF, 0xFF)),
    ("Black", Srgb::from_u8(0x00, 0x00, 0x00)),
    ("Grey", Srgb::from_u8(0x80, 0x80, 0x80)),
    ("Silver", Srgb::from_u8(0xC0, 0xC0, 0xC0)),
    ("Red", Srgb::from_u8(0xFF, 0x00, 0x00)),
    ("Lime", Srgb::from_u8(0x00, 0xFF, 0x00)),
    ("Blue", Srgb::from_u8(0x00, 0x00, 0xFF)),
    ("Cyan", Srgb::from_u8(0x00, 0xFF, 0xFF)),
    ("Yellow", Srgb::from_u8(0xFF, 0xFF, 0x00)),
    ("Magenta", Srgb::from_u8(0xFF, 0x00, 0xFF)),
    ("Purple", Srgb::from_u8(0x80, 0x00, 0x80)),
    ("Green", Srgb::from_u8(0x00, 0x80, 0x00)),
    ("Maroon", Srgb::from_u8(0x80, 0x00, 0x00)),
    ("Olive", Srgb::from_u8(0x80, 0x80, 0x00)),
    ("Navy", Srgb::from_u8(0x00, 0x00, 0x80)),
    ("Teal", Srgb::from_u8(0x00, 0x80, 0x80)),
    ("Orange", Srgb::from_u8(0xFF, 0xA5, 0x00)),
    ("Brown", Srgb::from_u8(0xA5, 0x2A, 0x2A)),
    ("Pink", Srgb::from_u8(0xFF, 0xC0, 0xCB)),
    ("Chocolate", Srgb::from_u8(0xD2, 0x69, 0x1E)),
    ("Dark grey", Srgb::from_u8(0xA9, 0xA9, 0xA9)),
    ("Sky blue", Srgb::from_u8(0x87, 0xCE, 0xEB)),
    ("Dark green", Srgb::from_u8(0x00, 0x64, 0x00)),
    ("Dark magenta", Srgb::from_u8(0x8B, 0x00, 0x8B)),
    ("Gold", Srgb::from_u8(0xFF, 0xD7, 0x00)),
    ("Coral", Srgb::from_u8(0xFF, 0x7F, 0x50)),
    ("Dark orange", Srgb::from_u8(0xFF, 0x8C, 0x00)),
    ("Hot pink", Srgb::from_u8(0xFF, 0x69, 0xB4)),
    ("Khaki", Srgb::from_u8(0xF0, 0xE6, 0x8C)),
    ("Dark khaki", Srgb::from_u8(0xBD, 0xB7, 0x6B)),
    ("Violet", Srgb::from_u8(0xEE, 0x82, 0xEE)),
    ("Orange red", Srgb::from_u8(0xFF, 0x45, 0x00)),
];

/// An ordered list of `(name, color)` pairs backed by a [`Palette`].
///
/// Names here are the English keys; localized display names are looked up
/// by index by the caller.
///
/// ```
/// use color_grid::{ColorTable, Srgb};
///
/// let table = ColorTable::standard();
/// assert_eq!(table.len(), 32);
/// assert_eq!(table.name(0), "White");
/// assert_eq!(table.color(4), Srgb::from_u8(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct ColorTable {
    names: Vec<String>,
    palette: Palette,
}

impl ColorTable {
    /// The standard 32-color table.
    pub fn standard() -> Self {
        let names = STANDARD_COLORS
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        let colors: Vec<Srgb> = STANDARD_COLORS.iter().map(|&(_, color)| color).collect();
        let palette = match Palette::new(&colors) {
            Ok(palette) => palette,
            Err(e) => unreachable!("standard color table is valid: {e}"),
        };
        Self { names, palette }
    }

    /// Build a custom table.
    ///
    /// # Errors
    ///
    /// Same as [`Palette::new`], plus [`PaletteError::TooManyColors`] above
    /// [`MAX_TABLE_LEN`] entries.
    pub fn new<S: Into<String>>(entries: Vec<(S, Srgb)>) -> Result<Self, PaletteError> {
        if entries.len() > MAX_TABLE_LEN {
            return Err(PaletteError::TooManyColors {
                len: entries.len(),
                max: MAX_TABLE_LEN,
            });
        }
        let mut names = Vec::with_capacity(entries.len());
        let mut colors = Vec::with_capacity(entries.len());
        for (name, color) in entries {
            names.push(name.into());
            colors.push(color);
        }
        let palette = Palette::new(&colors)?;
        Ok(Self { names, palette })
    }

    /// Replace the distance metric used for matching.
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.palette = self.palette.with_distance_metric(metric);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// English name of entry `idx`.
    #[inline]
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Color of entry `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.palette.color(idx)
    }

    /// The backing palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the background (white) entry, if the table has one.
    pub fn background_index(&self) -> Option<usize> {
        self.palette.index_of(Srgb::WHITE)
    }

    /// Iterate over `(index, name, color)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, Srgb)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(move |(i, name)| (i, name.as_str(), self.palette.color(i)))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}
