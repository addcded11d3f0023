//! Output types of the mapping step.
//!
//! - [`IndexGrid`]: one table index per pixel.
//! - [`Legend`]: the numbered list of used, non-background colors.

mod index_grid;
mod legend;

pub use index_grid::IndexGrid;
pub use legend::{Legend, LegendEntry};
