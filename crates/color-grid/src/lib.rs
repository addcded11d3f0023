#![allow(clippy::module_inception)]

//! color-grid: named-color palette matching for pixel coloring sheets
//!
//! Turns an RGB pixel buffer into a grid of indices into a small table of
//! everyday color names, optionally restricted to the `K` most useful
//! entries.
//!
//! # Quick Start
//!
//! ```
//! use color_grid::{ColorCount, ColorTable, GridMapper, Legend, Srgb};
//!
//! let mapper = GridMapper::new(ColorTable::standard())
//!     .colors(ColorCount::new(4).unwrap());
//!
//! let pixels = vec![Srgb::from_u8(250, 10, 10); 6];
//! let grid = mapper.map(&pixels, 3, 2).unwrap();
//!
//! let legend = Legend::from_grid(&grid);
//! assert_eq!(legend.len(), 1);
//! assert_eq!(grid.table().name(legend.entries()[0].table_index), "Red");
//! ```
//!
//! # Matching
//!
//! Each pixel goes to the table entry with the smallest squared Euclidean
//! distance in 8-bit RGB. On equal distances the earlier table entry wins,
//! which keeps the output deterministic. [`DistanceMetric::Oklab`] swaps in
//! a perceptual distance.
//!
//! # Reduction
//!
//! With a [`ColorCount`] below 32, a [`PaletteReducer`] first selects the
//! working subset ([`ReductionStrategy::MaxCoverage`] by default) and the
//! mapper then matches against that subset only. Grid indices always refer
//! to the full table.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod reduce;


pub use api::{GridError, GridMapper};
pub use color::{LinearRgb, Oklab, Srgb};
pub use output::{IndexGrid, Legend, LegendEntry};
pub use palette::{ColorTable, DistanceMetric, Palette, PaletteError, MAX_TABLE_LEN};
pub use reduce::{ColorCount, PaletteReducer, ReductionStrategy};
