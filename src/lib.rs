//! Pixeliazo - pixel-art coloring sheets from images
//!
//! Converts an image into a two-sheet workbook: a numbered grid with a color
//! legend, and the same grid painted in the named colors.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
