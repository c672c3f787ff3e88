//! Character-budget width search
//!
//! Finds the widest rendering whose text fits a character budget. There is no
//! closed form for text length as a function of width (glyph lengths, row
//! count and newlines all contribute), so widths are probed and each probe is
//! memoized in a [`RenderCache`].
//!
//! The search assumes text length never decreases as width grows for a fixed
//! image and palette. That holds for aspect-preserving resizing because both
//! the column and row counts are non-decreasing in width.

use std::collections::HashMap;

use image::DynamicImage;

use crate::config::ArtConfig;
use crate::error::Result;
use crate::palette::Palette;
use crate::render::{Rendering, render};

/// Memoized renderings keyed by width, scoped to one search
pub struct RenderCache<'a> {
    image: &'a DynamicImage,
    palette: &'a Palette,
    config: &'a ArtConfig,
    renders: HashMap<u32, Rendering>,
}

impl<'a> RenderCache<'a> {
    pub fn new(image: &'a DynamicImage, palette: &'a Palette, config: &'a ArtConfig) -> Self {
        Self {
            image,
            palette,
            config,
            renders: HashMap::new(),
        }
    }

    /// Rendering at `width`, computed on first request only
    pub fn get_or_render(&mut self, width: u32) -> Result<&Rendering> {
        if !self.renders.contains_key(&width) {
            let rendering = render(self.image, self.palette, width, self.config)?;
            log::debug!(
                "probed width {width}: {} rows, {} chars",
                rendering.rows,
                rendering.char_len
            );
            self.renders.insert(width, rendering);
        }
        Ok(&self.renders[&width])
    }

    /// Whether the rendering at `width` fits in `max_chars`
    pub fn fits(&mut self, width: u32, max_chars: usize) -> Result<bool> {
        Ok(self.get_or_render(width)?.fits(max_chars))
    }

    /// Number of distinct widths rendered so far
    pub fn len(&self) -> usize {
        self.renders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renders.is_empty()
    }

    pub fn contains(&self, width: u32) -> bool {
        self.renders.contains_key(&width)
    }

    /// Consume the cache and take the rendering at `width`
    fn take(mut self, width: u32) -> Result<Rendering> {
        match self.renders.remove(&width) {
            Some(rendering) => Ok(rendering),
            None => render(self.image, self.palette, width, self.config),
        }
    }
}

/// Result of a budget search
#[derive(Debug, Clone)]
pub struct BudgetFit {
    /// Chosen rendering
    pub rendering: Rendering,
    /// False when even width 1 exceeds the budget
    pub within_budget: bool,
    /// Distinct widths rendered during the search
    pub probes: usize,
}

/// Find the widest rendering whose text fits in `max_chars` characters
///
/// Phase 1 walks down from `config.start_width` to the first width that fits.
/// Phase 2 walks up from there until the next width would overflow, stopping
/// at `config.max_width`.
///
/// If no width fits, the width-1 rendering is returned with
/// `within_budget == false`.
pub fn find_width_for_budget(
    image: &DynamicImage,
    palette: &Palette,
    max_chars: usize,
    config: &ArtConfig,
) -> Result<BudgetFit> {
    config.validate()?;

    let mut cache = RenderCache::new(image, palette, config);
    let start = config.start_width.min(config.max_width);

    // Phase 1: feasible lower bound
    let mut lower = None;
    for width in (1..=start).rev() {
        if cache.fits(width, max_chars)? {
            lower = Some(width);
            break;
        }
    }

    let Some(lower) = lower else {
        let probes = cache.len();
        let rendering = cache.take(1)?;
        log::warn!(
            "no width fits {max_chars} chars; width 1 needs {}",
            rendering.char_len
        );
        return Ok(BudgetFit {
            rendering,
            within_budget: false,
            probes,
        });
    };

    // Phase 2: grow until the next width overflows
    let mut best = lower;
    while best < config.max_width && cache.fits(best + 1, max_chars)? {
        best += 1;
    }
    if best == config.max_width {
        log::debug!("search reached max width {}", config.max_width);
    }

    let probes = cache.len();
    let rendering = cache.take(best)?;
    log::info!(
        "chose width {best} ({} chars of {max_chars}) after {probes} probes",
        rendering.char_len
    );

    Ok(BudgetFit {
        rendering,
        within_budget: true,
        probes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PalettePreset;
    use image::{GrayImage, Luma};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            Luma([((x * 3 + y * 5) % 256) as u8])
        }))
    }

    fn brute_force_best(
        image: &DynamicImage,
        palette: &Palette,
        max_chars: usize,
        config: &ArtConfig,
    ) -> Option<u32> {
        (1..=config.max_width)
            .filter(|&w| {
                render(image, palette, w, config)
                    .map(|r| r.fits(max_chars))
                    .unwrap_or(false)
            })
            .max()
    }

    #[test]
    fn test_cache_renders_each_width_once() {
        let image = gradient(50, 30);
        let palette = Palette::from(PalettePreset::Standard);
        let config = ArtConfig::default();
        let mut cache = RenderCache::new(&image, &palette, &config);

        assert!(cache.is_empty());
        let first = cache.get_or_render(12).unwrap().clone();
        let second = cache.get_or_render(12).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(12));
        assert!(!cache.contains(13));
    }

    #[test]
    fn test_result_fits_budget() {
        let image = gradient(120, 80);
        let palette = Palette::from(PalettePreset::Standard);
        let config = ArtConfig::default();

        for budget in [10, 100, 500, 4000] {
            let fit = find_width_for_budget(&image, &palette, budget, &config).unwrap();
            assert!(fit.within_budget);
            assert!(fit.rendering.char_len <= budget, "budget {budget}");
        }
    }

    #[test]
    fn test_result_is_maximal() {
        let image = gradient(90, 45);
        let palette = Palette::new(["##", "  "]).unwrap();
        let config = ArtConfig {
            max_width: 150,
            ..Default::default()
        };

        for budget in [5, 60, 777, 3000, 4000] {
            let fit = find_width_for_budget(&image, &palette, budget, &config).unwrap();
            let expected = brute_force_best(&image, &palette, budget, &config);
            assert_eq!(Some(fit.rendering.width), expected, "budget {budget}");
        }
    }

    #[test]
    fn test_grows_past_start_width() {
        let image = gradient(100, 10);
        let palette = Palette::from(PalettePreset::Minimal);
        let config = ArtConfig::default();

        let fit = find_width_for_budget(&image, &palette, 4000, &config).unwrap();
        assert!(fit.rendering.width > config.start_width);
        let next = render(&image, &palette, fit.rendering.width + 1, &config).unwrap();
        assert!(!next.fits(4000));
    }

    #[test]
    fn test_stops_at_max_width() {
        let image = gradient(64, 4);
        let palette = Palette::from(PalettePreset::Minimal);
        let config = ArtConfig {
            max_width: 60,
            ..Default::default()
        };

        let fit = find_width_for_budget(&image, &palette, usize::MAX, &config).unwrap();
        assert!(fit.within_budget);
        assert_eq!(fit.rendering.width, 60);
    }

    #[test]
    fn test_start_width_above_max_width() {
        let image = gradient(64, 64);
        let palette = Palette::from(PalettePreset::Minimal);
        let config = ArtConfig {
            start_width: 40,
            max_width: 8,
            ..Default::default()
        };

        let fit = find_width_for_budget(&image, &palette, 4000, &config).unwrap();
        assert_eq!(fit.rendering.width, 8);
    }

    #[test]
    fn test_unsatisfiable_budget_falls_back_to_width_one() {
        let image = gradient(10, 10);
        let palette = Palette::new(["####", "    "]).unwrap();
        let config = ArtConfig::default();

        let fit = find_width_for_budget(&image, &palette, 3, &config).unwrap();
        assert!(!fit.within_budget);
        assert_eq!(fit.rendering.width, 1);
        assert_eq!(fit.rendering.char_len, 4);
        assert_eq!(fit.probes, config.start_width as usize);
    }

    #[test]
    fn test_budget_equal_to_width_one_length() {
        let image = gradient(10, 10);
        let palette = Palette::new(["####", "    "]).unwrap();
        let config = ArtConfig::default();

        let fit = find_width_for_budget(&image, &palette, 4, &config).unwrap();
        assert!(fit.within_budget);
        assert_eq!(fit.rendering.width, 1);
    }

    #[test]
    fn test_search_is_idempotent() {
        let image = gradient(77, 33);
        let palette = Palette::from(PalettePreset::Dense);
        let config = ArtConfig::default();

        let a = find_width_for_budget(&image, &palette, 1500, &config).unwrap();
        let b = find_width_for_budget(&image, &palette, 1500, &config).unwrap();
        assert_eq!(a.rendering, b.rendering);
        assert_eq!(a.probes, b.probes);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let image = gradient(8, 8);
        let palette = Palette::from(PalettePreset::Standard);
        let config = ArtConfig {
            max_width: 0,
            ..Default::default()
        };
        assert!(find_width_for_budget(&image, &palette, 100, &config).is_err());
    }
}
