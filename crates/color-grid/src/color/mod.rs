//! Color types and conversion utilities
//!
//! - [`Srgb`]: 8-bit gamma-encoded color, used for pixels and named colors.
//! - [`LinearRgb`]: linear light, the step between sRGB and Oklab.
//! - [`Oklab`]: perceptual space for the optional perceptual metric.
//!
//! ```
//! use color_grid::{Oklab, Srgb};
//!
//! let orange = Srgb::from_u8(255, 165, 0);
//! let lab = Oklab::from(orange);
//! assert!(lab.l > 0.5);
//! ```

mod linear_rgb;
mod lut;
mod oklab;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use srgb::Srgb;
