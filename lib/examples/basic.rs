/// Basic example: render a synthetic image at a fixed width and within a budget
///
/// This draws a bright circle on a gray background and prints it twice
use ascii_fit::{ArtConfig, Palette, PalettePreset, SizingMode, produce_art_from_image};
use image::{DynamicImage, Rgba, RgbaImage};

fn main() {
    println!("ascii-fit - Basic Example");
    println!("=========================\n");

    let width = 160;
    let height = 80;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([100, 100, 100, 255]));

    // Draw a white circle with a black rim in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 30.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 4.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    let image = DynamicImage::ImageRgba8(img);
    let palette = Palette::from(PalettePreset::Standard);
    let config = ArtConfig::default();

    let fixed = produce_art_from_image(&image, &palette, SizingMode::FixedWidth(40), &config)
        .expect("fixed width render failed");
    println!("Fixed width 40:\n{}\n", fixed.text());

    let fitted = produce_art_from_image(&image, &palette, SizingMode::CharacterBudget(600), &config)
        .expect("budget render failed");
    println!(
        "Budget 600 -> width {} ({} chars):\n{}",
        fitted.width(),
        fitted.rendering.char_len,
        fitted.text()
    );
}
