//! Command-line arguments and their mapping onto library options.

use std::path::PathBuf;

use anyhow::Result;
use ascii_fit::config::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use ascii_fit::{ArtConfig, DEFAULT_MAX_CHARS, Palette, PalettePreset, SizingMode};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;

/// Convert an image to text art sized by width or by character budget
#[derive(Parser, Debug)]
#[command(name = "ascii-fit")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Image to convert
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Render at exactly this many columns
    #[arg(short, long, conflicts_with = "max_chars", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Maximum output length in characters (used unless --width is given)
    #[arg(short, long, default_value_t = DEFAULT_MAX_CHARS, value_parser = parse_budget)]
    pub max_chars: usize,

    /// Built-in palette
    #[arg(short, long, value_enum, default_value_t = PaletteArg::Standard)]
    pub palette: PaletteArg,

    /// Custom palette, one glyph per character, darkest first
    #[arg(short, long)]
    pub glyphs: Option<String>,

    /// Repeat each glyph this many times (2 gives roughly square cells)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub glyph_repeat: u16,

    /// Reverse the palette (for light backgrounds)
    #[arg(short, long)]
    pub invert: bool,

    /// Widest width the budget search may pick
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Maximum number of rows
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: u32,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = FilterArg::Lanczos3)]
    pub filter: FilterArg,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the chosen width and length to stderr
    #[arg(long)]
    pub show_width: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    Standard,
    Blocks,
    Minimal,
    Dense,
}

impl From<PaletteArg> for PalettePreset {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Standard => PalettePreset::Standard,
            PaletteArg::Blocks => PalettePreset::Blocks,
            PaletteArg::Minimal => PalettePreset::Minimal,
            PaletteArg::Dense => PalettePreset::Dense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Triangle => FilterType::Triangle,
            FilterArg::CatmullRom => FilterType::CatmullRom,
            FilterArg::Gaussian => FilterType::Gaussian,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn parse_budget(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("budget must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Args {
    /// Palette after applying --glyphs, --glyph-repeat and --invert
    pub fn resolve_palette(&self) -> Result<Palette> {
        let palette = match &self.glyphs {
            Some(glyphs) => Palette::from_chars(glyphs)?,
            None => PalettePreset::from(self.palette).palette(),
        };
        let palette = palette.repeated(usize::from(self.glyph_repeat))?;
        Ok(if self.invert {
            palette.reversed()
        } else {
            palette
        })
    }

    pub fn sizing(&self) -> SizingMode {
        match self.width {
            Some(width) => SizingMode::FixedWidth(width),
            None => SizingMode::CharacterBudget(self.max_chars),
        }
    }

    pub fn config(&self) -> ArtConfig {
        ArtConfig {
            max_width: self.max_width,
            max_height: self.max_height,
            filter: self.filter.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ascii-fit", "photo.png"]).unwrap();
        assert_eq!(args.image, PathBuf::from("photo.png"));
        assert_eq!(args.sizing(), SizingMode::CharacterBudget(4000));
        assert_eq!(args.palette, PaletteArg::Standard);
        assert_eq!(args.log_level, "warn");
        assert!(!args.invert);

        let config = args.config();
        assert_eq!(config.max_width, 2000);
        assert_eq!(config.max_height, 10_000);
        assert_eq!(config.start_width, 40);
    }

    #[test]
    fn test_width_selects_fixed_sizing() {
        let args = Args::try_parse_from(["ascii-fit", "photo.png", "-w", "80"]).unwrap();
        assert_eq!(args.sizing(), SizingMode::FixedWidth(80));
    }

    #[test]
    fn test_max_chars() {
        let args = Args::try_parse_from(["ascii-fit", "photo.png", "--max-chars", "2000"]).unwrap();
        assert_eq!(args.sizing(), SizingMode::CharacterBudget(2000));
    }

    #[test]
    fn test_width_and_max_chars_conflict() {
        let result = Args::try_parse_from(["ascii-fit", "a.png", "-w", "80", "-m", "100"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(Args::try_parse_from(["ascii-fit", "a.png", "-w", "0"]).is_err());
        assert!(Args::try_parse_from(["ascii-fit", "a.png", "-m", "0"]).is_err());
        assert!(Args::try_parse_from(["ascii-fit", "a.png", "--glyph-repeat", "0"]).is_err());
    }

    #[test]
    fn test_missing_image_rejected() {
        assert!(Args::try_parse_from(["ascii-fit"]).is_err());
    }

    #[test]
    fn test_custom_glyphs_inverted_and_repeated() {
        let args = Args::try_parse_from([
            "ascii-fit",
            "a.png",
            "--glyphs",
            " .#",
            "--glyph-repeat",
            "2",
            "--invert",
        ])
        .unwrap();
        let palette = args.resolve_palette().unwrap();
        assert_eq!(palette.glyph(0), "##");
        assert_eq!(palette.glyph(2), "  ");
    }

    #[test]
    fn test_single_glyph_palette_is_error() {
        let args = Args::try_parse_from(["ascii-fit", "a.png", "--glyphs", "#"]).unwrap();
        assert!(args.resolve_palette().is_err());
    }

    #[test]
    fn test_preset_and_filter() {
        let args = Args::try_parse_from([
            "ascii-fit",
            "a.png",
            "--palette",
            "blocks",
            "--filter",
            "catmull-rom",
        ])
        .unwrap();
        assert_eq!(args.resolve_palette().unwrap().glyph(4), "█");
        assert_eq!(args.config().filter, FilterType::CatmullRom);
    }
}
