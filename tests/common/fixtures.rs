//! Test images written to scratch directories.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];
pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Captions of the built-in English language
pub mod captions {
    pub const INSTRUCTIONS: &str =
        "Paint the boxes with the appropriate colors to reveal the hidden image.";
    pub const GRID_SHEET: &str = "Draw the pixels";
    pub const PAINTED_SHEET: &str = "Painted picture";
}

/// Build an image from rows of RGB triples
pub fn image_from_rows(rows: &[&[[u8; 3]]]) -> RgbImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbImage::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]))
}

/// 4x2 image using white, black, red and blue:
///
/// ```text
/// R R W K
/// W B B K
/// ```
pub fn small_picture() -> RgbImage {
    image_from_rows(&[&[RED, RED, WHITE, BLACK], &[WHITE, BLUE, BLUE, BLACK]])
}

/// Vertical bands of the given colors, each `band` pixels wide
pub fn bands(colors: &[[u8; 3]], band: u32, height: u32) -> RgbImage {
    let width = colors.len() as u32 * band;
    RgbImage::from_fn(width, height, |x, _| Rgb(colors[(x / band) as usize]))
}

/// 2x1 RGBA image: opaque red next to a fully transparent pixel
pub fn half_transparent() -> RgbaImage {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
    img
}

/// Save an RGB image as PNG inside `dir`
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("write test image");
    path
}

/// Save an RGBA image as PNG inside `dir`
pub fn write_rgba_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("write test image");
    path
}

/// A language file with recognizable names (`name 0` .. `name 31`)
pub fn language_file(captions: [&str; 3]) -> String {
    let mut text = captions.join("\n");
    text.push('\n');
    for i in 0..32 {
        text.push_str(&format!("name {i}\n"));
    }
    text
}
