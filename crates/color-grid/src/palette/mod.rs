//! Palette types and utilities
//!
//! [`Palette`] does the matching; [`ColorTable`] attaches names to a palette
//! and carries the standard 32-color table.

mod error;
mod palette;
mod table;

pub use error::PaletteError;
pub use palette::{DistanceMetric, Palette};
pub use table::{ColorTable, MAX_TABLE_LEN};
