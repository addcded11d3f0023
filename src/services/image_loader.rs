use color_grid::Srgb;
use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

use crate::error::ConvertError;

/// Decode an image file into 8-bit RGB, flattening transparency onto white.
pub fn load_image(path: &Path) -> Result<RgbImage, ConvertError> {
    let image = image::open(path).map_err(|source| ConvertError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded image"
    );
    Ok(flatten_alpha(image))
}

/// Convert to RGB, alpha-compositing against white.
pub fn flatten_alpha(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);
    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        *dst = Rgb(composite_over_white(src.0));
    }
    rgb
}

fn composite_over_white([r, g, b, a]: [u8; 4]) -> [u8; 3] {
    match a {
        255 => [r, g, b],
        0 => [255, 255, 255],
        _ => {
            let af = a as u16;
            let blend = |c: u8| ((c as u16 * af + 255 * (255 - af)) / 255) as u8;
            [blend(r), blend(g), blend(b)]
        }
    }
}

/// Row-major pixel buffer for the color mapper
pub fn to_pixels(image: &RgbImage) -> Vec<Srgb> {
    image.pixels().map(|p| Srgb::from_bytes(p.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_composite_over_white() {
        assert_eq!(composite_over_white([10, 20, 30, 255]), [10, 20, 30]);
        assert_eq!(composite_over_white([10, 20, 30, 0]), [255, 255, 255]);
        // Half-transparent black lands on mid grey
        assert_eq!(composite_over_white([0, 0, 0, 128]), [127, 127, 127]);
    }

    #[test]
    fn test_flatten_rgba_image() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        rgba.put_pixel(1, 0, Rgba([0, 0, 255, 0]));

        let rgb = flatten_alpha(DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_to_pixels_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, Rgb([1, 2, 3]));
        img.put_pixel(0, 1, Rgb([4, 5, 6]));

        let pixels = to_pixels(&img);
        assert_eq!(pixels.len(), 4);
        assert_eq!(pixels[1], Srgb::from_u8(1, 2, 3));
        assert_eq!(pixels[2], Srgb::from_u8(4, 5, 6));
    }

    #[test]
    fn test_load_missing_file_is_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("nope.png")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_load_garbage_is_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(ConvertError::ImageRead { .. })
        ));
    }
}
