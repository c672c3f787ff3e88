mod args;

use std::io::Write;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure logging
    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let palette = args.resolve_palette().context("invalid palette")?;
    let sizing = args.sizing();
    let config = args.config();

    log::debug!(
        "rendering {} with {} glyphs, {:?}",
        args.image.display(),
        palette.len(),
        sizing
    );

    let art = ascii_fit::produce_art(&args.image, &palette, sizing, &config)
        .with_context(|| format!("failed to convert {}", args.image.display()))?;

    if !art.within_budget {
        log::warn!(
            "output is {} chars, over the {} char budget; printing narrowest rendering",
            art.rendering.char_len,
            args.max_chars
        );
    }

    if args.show_width {
        eprintln!(
            "width {} x {} rows, {} chars",
            art.rendering.width, art.rendering.rows, art.rendering.char_len
        );
    }

    match &args.output {
        Some(path) => std::fs::write(path, format!("{}\n", art.text()))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", art.text()).context("failed to write to stdout")?;
        }
    }

    Ok(())
}
