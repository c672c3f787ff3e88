use image::imageops::FilterType;

use crate::error::{ArtError, Result};

/// Default character budget when no width is requested
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Width the budget search starts probing downward from
pub const DEFAULT_START_WIDTH: u32 = 40;

/// Upper bound for the budget search
pub const DEFAULT_MAX_WIDTH: u32 = 2000;

/// Row cap applied after the aspect-ratio scaling
pub const DEFAULT_MAX_HEIGHT: u32 = 10_000;

/// How the output size is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingMode {
    /// Render at exactly this many columns
    FixedWidth(u32),
    /// Render at the widest width whose text fits in this many characters
    CharacterBudget(usize),
}

impl Default for SizingMode {
    fn default() -> Self {
        SizingMode::CharacterBudget(DEFAULT_MAX_CHARS)
    }
}

/// Configuration for rendering and the width search
#[derive(Debug, Clone)]
pub struct ArtConfig {
    /// Search
    pub start_width: u32,        // phase 1 starting point, default 40
    pub max_width: u32,          // search ceiling, default 2000

    /// Resizing
    pub max_height: u32,         // row cap, default 10000
    pub filter: FilterType,      // resampling filter, default Lanczos3
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            // Search
            start_width: DEFAULT_START_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,

            // Resizing
            max_height: DEFAULT_MAX_HEIGHT,
            filter: FilterType::Lanczos3,
        }
    }
}

impl ArtConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.start_width == 0 {
            return Err(ArtError::InvalidConfig(
                "start_width must be at least 1".to_string(),
            ));
        }
        if self.max_width == 0 {
            return Err(ArtError::InvalidConfig(
                "max_width must be at least 1".to_string(),
            ));
        }
        if self.max_height == 0 {
            return Err(ArtError::InvalidConfig(
                "max_height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates a sizing request against this configuration
    pub fn validate_sizing(&self, sizing: SizingMode) -> Result<()> {
        match sizing {
            SizingMode::FixedWidth(0) => Err(ArtError::InvalidWidth(0)),
            SizingMode::CharacterBudget(0) => Err(ArtError::InvalidConfig(
                "character budget must be at least 1".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
