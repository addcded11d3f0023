use image::{imageops, RgbImage};

use crate::models::ResampleFilter;

/// Compute the shrunk size for a requested width, keeping the aspect ratio.
///
/// Returns `None` unless `1 <= requested < width`; images are never enlarged.
pub fn target_size(width: u32, height: u32, requested: i64) -> Option<(u32, u32)> {
    if requested < 1 || requested >= i64::from(width) {
        return None;
    }
    let new_width = requested as u32;
    let new_height = (u64::from(new_width) * u64::from(height) / u64::from(width)).max(1);
    Some((new_width, new_height as u32))
}

/// Shrink `image` to the requested width, or return it untouched with a warning
/// when the width is not usable.
pub fn resize_to_width(image: RgbImage, requested: Option<i64>, filter: ResampleFilter) -> RgbImage {
    let Some(requested) = requested else {
        return image;
    };

    let (width, height) = image.dimensions();
    match target_size(width, height, requested) {
        Some((new_width, new_height)) => {
            tracing::debug!(
                width,
                height,
                new_width,
                new_height,
                ?filter,
                "Resizing image"
            );
            imageops::resize(&image, new_width, new_height, filter.filter_type())
        }
        None => {
            tracing::warn!(
                requested,
                width,
                "Width must be positive and smaller than the image width, keeping original size"
            );
            image
        }
    }
}
