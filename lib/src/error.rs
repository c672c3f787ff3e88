use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning an image into text
#[derive(Error, Debug)]
pub enum ArtError {
    /// The image could not be opened or decoded
    #[error("failed to decode image {}: {source}", path.display())]
    ImageDecode {
        /// Path that was being loaded
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Palette is too short or holds an unusable glyph
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Rendering width must be at least one column
    #[error("invalid width: {0} (must be at least 1)")]
    InvalidWidth(u32),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ArtError>;
