//! ascii-fit - image to text art converter
//!
//! Renders an image as rows of glyphs picked from a darkest-first palette.
//! The output is sized either by an explicit column count or by a character
//! budget, in which case the widest rendering that fits is searched for.
//!
//! # Example
//! ```no_run
//! use ascii_fit::{ArtConfig, Palette, PalettePreset, SizingMode, produce_art};
//!
//! let palette = Palette::from(PalettePreset::Standard);
//! let art = produce_art(
//!     "photo.jpg",
//!     &palette,
//!     SizingMode::CharacterBudget(4000),
//!     &ArtConfig::default(),
//! )
//! .unwrap();
//! println!("{}", art.text());
//! ```

pub mod config;
pub mod error;
pub mod luma;
pub mod palette;
pub mod processor;
pub mod render;
pub mod search;

// Re-export main types for convenience
pub use config::{ArtConfig, DEFAULT_MAX_CHARS, SizingMode};
pub use error::{ArtError, Result};
pub use luma::load_image;
pub use palette::{Palette, PalettePreset};
pub use processor::{Art, produce_art, produce_art_from_image};
pub use render::{Rendering, render};
pub use search::{BudgetFit, RenderCache, find_width_for_budget};
