//! Public API for the color-grid crate.
//!
//! [`GridMapper`] builder and [`GridError`] unified error type.

mod builder;
mod error;

pub use builder::GridMapper;
pub use error::GridError;
