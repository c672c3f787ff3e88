use std::path::Path;

use image::{DynamicImage, GrayImage, imageops};
use imageproc::stats::histogram;

use crate::error::{ArtError, Result};

/// Open and decode an image file
///
/// # Errors
/// `ImageDecode` if the file is missing, unreadable, or not a supported format.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|source| ArtError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Row count for a given column count, preserving the source aspect ratio
///
/// # Arguments
/// * `src_width`, `src_height` - Source image dimensions
/// * `width` - Target column count
/// * `max_height` - Cap on the result
///
/// # Returns
/// Scaled height, at least 1 and at most `max_height`
pub fn scaled_height(src_width: u32, src_height: u32, width: u32, max_height: u32) -> u32 {
    if src_width == 0 {
        return 1;
    }
    let height = (src_height as f64 * width as f64 / src_width as f64).round();
    (height as u32).clamp(1, max_height.max(1))
}

/// Convert to grayscale and resize to exactly `width` columns
///
/// The row count follows the image's aspect ratio, capped at `max_height`.
pub fn resize_to_width(
    image: &DynamicImage,
    width: u32,
    max_height: u32,
    filter: imageops::FilterType,
) -> Result<GrayImage> {
    if width == 0 {
        return Err(ArtError::InvalidWidth(width));
    }

    let gray = image.to_luma8();
    let (src_width, src_height) = gray.dimensions();
    let height = scaled_height(src_width, src_height, width, max_height);

    if (src_width, src_height) == (width, height) {
        return Ok(gray);
    }
    Ok(imageops::resize(&gray, width, height, filter))
}

/// Darkest and lightest luminance across the whole grid
///
/// Returns `(0, 0)` for an empty image.
pub fn luminance_range(gray: &GrayImage) -> (u8, u8) {
    let hist = histogram(gray);
    let counts = &hist.channels[0];

    let darkest = counts.iter().position(|&c| c > 0);
    let lightest = counts.iter().rposition(|&c| c > 0);

    match (darkest, lightest) {
        (Some(lo), Some(hi)) => (lo as u8, hi as u8),
        _ => (0, 0),
    }
}
