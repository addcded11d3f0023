//! Validated color counts.

use std::fmt;

use crate::palette::{PaletteError, MAX_TABLE_LEN};

/// Number of colors a sheet may use, always within `MIN..=MAX`.
///
/// ```
/// use color_grid::ColorCount;
///
/// assert_eq!(ColorCount::new(5).unwrap().get(), 5);
/// assert!(ColorCount::new(1).is_err());
/// assert_eq!(ColorCount::default(), ColorCount::full());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCount(u8);

impl ColorCount {
    /// Fewest colors a sheet can be drawn with (background plus one).
    pub const MIN: u8 = 2;
    /// Every entry of the standard table.
    pub const MAX: u8 = MAX_TABLE_LEN as u8;

    /// Validate a requested count.
    ///
    /// Takes a signed value so that raw user input (including negatives) can
    /// be checked without a separate conversion step.
    pub fn new(requested: i64) -> Result<Self, PaletteError> {
        if requested < Self::MIN as i64 || requested > Self::MAX as i64 {
            return Err(PaletteError::ColorCountOutOfRange {
                requested,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(requested as u8))
    }

    /// The full table.
    #[inline]
    pub const fn full() -> Self {
        Self(Self::MAX)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// True when no reduction takes place.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for ColorCount {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for ColorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
