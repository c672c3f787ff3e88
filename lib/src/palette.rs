//! Glyph palettes
//!
//! A palette is an ordered list of glyph strings, darkest first. Each bucket
//! of the luminance range maps to one entry.

use crate::error::{ArtError, Result};

/// 10 levels from darkest (space) to brightest (@)
pub const STANDARD_GLYPHS: &str = " .:-=+*#%@";

/// Unicode block elements (5 levels)
pub const BLOCK_GLYPHS: &str = " ░▒▓█";

/// Clean 4-level ramp
pub const MINIMAL_GLYPHS: &str = " .:#";

/// 16-level ramp for larger outputs
pub const DENSE_GLYPHS: &str = " .'`^,:;!i~+?*#@";

/// Ordered glyph list, darkest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<String>,
}

impl Palette {
    /// Build a palette from glyph strings ordered darkest to lightest
    ///
    /// # Errors
    /// `InvalidPalette` if there are fewer than 2 glyphs, or a glyph is empty
    /// or contains a newline.
    pub fn new<S: Into<String>>(glyphs: impl IntoIterator<Item = S>) -> Result<Self> {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();

        if glyphs.len() < 2 {
            return Err(ArtError::InvalidPalette(format!(
                "need at least 2 glyphs, got {}",
                glyphs.len()
            )));
        }
        if let Some(pos) = glyphs.iter().position(|g| g.is_empty()) {
            return Err(ArtError::InvalidPalette(format!("glyph {pos} is empty")));
        }
        if let Some(pos) = glyphs.iter().position(|g| g.contains(['\n', '\r'])) {
            return Err(ArtError::InvalidPalette(format!(
                "glyph {pos} contains a line break"
            )));
        }

        Ok(Self { glyphs })
    }

    /// One glyph per character of `chars`
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(chars.chars().map(String::from))
    }

    /// Same glyphs, lightest first (photographic negative)
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs }
    }

    /// Each glyph repeated `times` times; `"#"` becomes `"##"` for 2
    pub fn repeated(&self, times: usize) -> Result<Self> {
        if times == 0 {
            return Err(ArtError::InvalidPalette(
                "glyph repeat must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            glyphs: self.glyphs.iter().map(|g| g.repeat(times)).collect(),
        })
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a palette holds at least two glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a bucket index; out-of-range indices clamp to the lightest
    pub fn glyph(&self, index: usize) -> &str {
        &self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Highest valid bucket index
    pub fn last_index(&self) -> usize {
        self.glyphs.len() - 1
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalettePreset {
    /// 10-level ASCII density ramp
    #[default]
    Standard,
    /// Unicode block characters
    Blocks,
    /// 4-level clean look
    Minimal,
    /// 16-level ramp
    Dense,
}

impl PalettePreset {
    /// Glyph characters for this preset, darkest first
    pub fn chars(&self) -> &'static str {
        match self {
            PalettePreset::Standard => STANDARD_GLYPHS,
            PalettePreset::Blocks => BLOCK_GLYPHS,
            PalettePreset::Minimal => MINIMAL_GLYPHS,
            PalettePreset::Dense => DENSE_GLYPHS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Standard => "standard",
            PalettePreset::Blocks => "blocks",
            PalettePreset::Minimal => "minimal",
            PalettePreset::Dense => "dense",
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            glyphs: self.chars().chars().map(String::from).collect(),
        }
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        preset.palette()
    }
}
