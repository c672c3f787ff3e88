use image::{DynamicImage, GrayImage};
use rayon::prelude::*;

use crate::config::ArtConfig;
use crate::error::Result;
use crate::luma::{luminance_range, resize_to_width};
use crate::palette::Palette;

/// Rendered text for one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Rows of glyphs joined by `\n`, no trailing newline
    pub text: String,
    /// Column count the image was resized to
    pub width: u32,
    /// Number of text rows
    pub rows: u32,
    /// Length of `text` in characters
    pub char_len: usize,
    /// True when every pixel had the same luminance
    pub degenerate: bool,
}

impl Rendering {
    /// Whether the text fits in `max_chars` characters
    pub fn fits(&self, max_chars: usize) -> bool {
        self.char_len <= max_chars
    }
}

/// Maps luminance values onto palette buckets
///
/// Buckets split `[darkest, lightest]` into `len - 1` equal steps and a pixel
/// goes to the nearest step boundary.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    darkest: u8,
    step: f64,
    last_index: usize,
}

impl Quantizer {
    pub fn new(darkest: u8, lightest: u8, palette_len: usize) -> Self {
        let last_index = palette_len.saturating_sub(1);
        let step = if last_index == 0 {
            0.0
        } else {
            f64::from(lightest.saturating_sub(darkest)) / last_index as f64
        };
        Self {
            darkest,
            step,
            last_index,
        }
    }

    /// True when the range is flat and every pixel lands in bucket 0
    pub fn is_degenerate(&self) -> bool {
        self.step == 0.0
    }

    /// Bucket index for a luminance value, always within the palette
    pub fn bucket(&self, luminance: u8) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        let offset = f64::from(luminance.saturating_sub(self.darkest));
        let index = (offset / self.step).round();
        (index.max(0.0) as usize).min(self.last_index)
    }
}

/// Render an already resized grayscale grid
///
/// Each row's glyphs are concatenated without separator and rows are joined
/// by a newline.
pub fn render_luma(gray: &GrayImage, palette: &Palette) -> Rendering {
    let (width, height) = gray.dimensions();
    let (darkest, lightest) = luminance_range(gray);
    let quantizer = Quantizer::new(darkest, lightest, palette.len());

    if quantizer.is_degenerate() {
        log::debug!("flat image at width {width}: luminance {darkest}, using darkest glyph");
    }

    // Parallelize row mapping; collect keeps row order
    let rows: Vec<String> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = String::new();
            for x in 0..width {
                let luminance = gray.get_pixel(x, y)[0];
                row.push_str(palette.glyph(quantizer.bucket(luminance)));
            }
            row
        })
        .collect();

    let text = rows.join("\n");
    let char_len = text.chars().count();

    Rendering {
        text,
        width,
        rows: height,
        char_len,
        degenerate: quantizer.is_degenerate(),
    }
}

/// Render an image at a specific width
///
/// # Arguments
/// * `image` - Decoded source image, any color type
/// * `palette` - Glyphs ordered darkest first
/// * `width` - Target column count
/// * `config` - Resizing settings (`max_height`, `filter`)
///
/// # Errors
/// `InvalidWidth` if `width` is 0.
pub fn render(
    image: &DynamicImage,
    palette: &Palette,
    width: u32,
    config: &ArtConfig,
) -> Result<Rendering> {
    let gray = resize_to_width(image, width, config.max_height, config.filter)?;
    Ok(render_luma(&gray, palette))
}
