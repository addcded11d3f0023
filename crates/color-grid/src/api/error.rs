//! Error type for the color-grid public API.

use std::fmt;

/// Error returned by [`GridMapper::map`](crate::GridMapper::map).
///
/// ```
/// use color_grid::{ColorTable, GridError, GridMapper, Srgb};
///
/// let mapper = GridMapper::new(ColorTable::standard());
/// let err = mapper.map(&[Srgb::WHITE; 5], 2, 2).unwrap_err();
/// assert!(matches!(err, GridError::DimensionMismatch { pixels: 5, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Pixel buffer does not match the stated dimensions
    DimensionMismatch {
        /// Number of pixels supplied
        pixels: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch {
                pixels,
                width,
                height,
            } => write!(
                f,
                "{} pixels do not fill a {}x{} grid",
                pixels, width, height
            ),
        }
    }
}

impl std::error::Error for GridError {}
