//! sRGB color type
//!
//! Every pixel and every named color is an 8-bit sRGB triple. This is the
//! representation images are decoded into and spreadsheets are filled with.

use std::fmt;

/// An 8-bit color in sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Srgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Pure white, the background color of a coloring sheet.
    pub const WHITE: Srgb = Srgb::from_u8(255, 255, 255);

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_grid::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Pack into a `0xRRGGBB` integer, the form spreadsheet writers take.
    ///
    /// ```
    /// use color_grid::Srgb;
    /// assert_eq!(Srgb::from_u8(0xD2, 0x69, 0x1E).to_rgb_u32(), 0xD2691E);
    /// ```
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Uppercase hex without the leading hash, e.g. `"FFA500"`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in 8-bit RGB space.
    ///
    /// The maximum (black to white) is `3 * 255^2 = 195075`.
    #[inline]
    pub fn distance_squared(self, other: Srgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
