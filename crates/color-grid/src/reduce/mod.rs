//! Palette reduction.
//!
//! A sheet with 32 colors is too much for small children. The reducer picks
//! at most `K` entries of the table; the mapper then only matches against
//! those.

mod count;
mod reducer;

pub use count::ColorCount;
pub use reducer::{coverage, PaletteReducer, ReductionStrategy};
