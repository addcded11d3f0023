//! Error types for palette operations
//!
//! Palette validation and color-count validation errors.

use std::fmt;

/// Error type for palette and color table validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// More entries than a color table may hold
    TooManyColors {
        /// Number of entries supplied
        len: usize,
        /// Maximum number of entries allowed
        max: usize,
    },
    /// Requested color count outside the supported range
    ColorCountOutOfRange {
        /// The rejected value
        requested: i64,
        /// Smallest accepted value
        min: u8,
        /// Largest accepted value
        max: u8,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::TooManyColors { len, max } => {
                write!(f, "too many colors: {} (max {})", len, max)
            }
            PaletteError::ColorCountOutOfRange {
                requested,
                min,
                max,
            } => {
                write!(
                    f,
                    "color count {} out of range (expected {} to {} inclusive)",
                    requested, min, max
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
