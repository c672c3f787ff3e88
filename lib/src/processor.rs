use std::path::Path;

use image::DynamicImage;

use crate::config::{ArtConfig, SizingMode};
use crate::error::Result;
use crate::luma::load_image;
use crate::palette::Palette;
use crate::render::{Rendering, render};
use crate::search::find_width_for_budget;

/// Final text art and how it was sized
#[derive(Debug, Clone)]
pub struct Art {
    /// Rendering that was selected
    pub rendering: Rendering,
    /// False when a character budget could not be met even at width 1
    pub within_budget: bool,
}

impl Art {
    pub fn text(&self) -> &str {
        &self.rendering.text
    }

    pub fn width(&self) -> u32 {
        self.rendering.width
    }
}

/// Loads an image from disk and converts it to text art
///
/// This runs the full pipeline:
/// 1. Validate configuration and sizing
/// 2. Decode the image
/// 3. Render at a fixed width, or search for the widest width within budget
///
/// # Arguments
/// * `path` - Image file to read
/// * `palette` - Glyphs ordered darkest first (reverse it to invert)
/// * `sizing` - Fixed width or character budget
/// * `config` - Search and resizing settings
///
/// # Errors
/// `ImageDecode` for unreadable images, `InvalidWidth`/`InvalidConfig` for
/// bad sizing or settings. Nothing is decoded if validation fails.
pub fn produce_art(
    path: impl AsRef<Path>,
    palette: &Palette,
    sizing: SizingMode,
    config: &ArtConfig,
) -> Result<Art> {
    config.validate()?;
    config.validate_sizing(sizing)?;

    let image = load_image(path)?;
    produce_art_from_image(&image, palette, sizing, config)
}

/// Converts an already decoded image to text art
///
/// Same as [`produce_art`] without the decoding step.
pub fn produce_art_from_image(
    image: &DynamicImage,
    palette: &Palette,
    sizing: SizingMode,
    config: &ArtConfig,
) -> Result<Art> {
    config.validate()?;
    config.validate_sizing(sizing)?;

    match sizing {
        SizingMode::FixedWidth(width) => {
            let rendering = render(image, palette, width, config)?;
            Ok(Art {
                rendering,
                within_budget: true,
            })
        }
        SizingMode::CharacterBudget(max_chars) => {
            let fit = find_width_for_budget(image, palette, max_chars, config)?;
            Ok(Art {
                rendering: fit.rendering,
                within_budget: fit.within_budget,
            })
        }
    }
}
