use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use copybook::cli::{parse_font_spec, Args};
use copybook::config::Settings;
use copybook::layout::paginate;
use copybook::model::{fetch_missing, merge_into, parse_text, DirStrokeProvider, StrokeCache};
use copybook::render::{encode_png, rasterize, Canvas, FontStore, PageRenderer};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read practice text
    let text = match (&args.input, &args.text) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        (None, Some(text)) => text.clone(),
        (None, None) => unreachable!("clap requires input or --text"),
    };

    let characters = parse_text(&text);
    if characters.is_empty() {
        anyhow::bail!("No characters to process");
    }

    log::info!("Processing {} characters", characters.len());

    let settings = Settings::from_args(&args).with_context(|| "Invalid settings")?;

    // Register font files
    let mut fonts = FontStore::new();
    for spec in &args.fonts {
        let (family, path) = parse_font_spec(spec)?;
        fonts
            .register_file(family, &path)
            .with_context(|| format!("Failed to load font file: {}", path.display()))?;
    }
    if fonts.is_empty() {
        log::warn!("No fonts registered, labels will be omitted (use --font FAMILY=PATH)");
    }

    // Fetch stroke data for the stroke-order bands
    let mut strokes = StrokeCache::new();
    if settings.show_stroke {
        if let Some(dir) = &args.strokes_dir {
            let provider = DirStrokeProvider::new(dir);
            let fetched = fetch_missing(&provider, &strokes, characters.iter().map(|c| c.ch));
            merge_into(&mut strokes, fetched);
            log::info!("Loaded stroke data for {} characters", strokes.len());
        }
    }

    let pages = paginate(&characters, &settings);
    log::info!("Laid out {} pages", pages.len());

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {}", args.output.display()))?;

    // Render each page and write it out
    let renderer = PageRenderer::new(&settings);
    for page in &pages {
        let mut canvas = Canvas::new();
        renderer.render(&mut canvas, &characters, page, &strokes);
        let pixmap = rasterize(&canvas, &fonts)
            .with_context(|| format!("Failed to render page {}", page.number))?;

        let png = encode_png(&pixmap)
            .with_context(|| format!("Failed to encode page {}", page.number))?;
        let path = args.output.join(format!("page-{}.png", page.number));
        fs::write(&path, png)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
    }

    println!(
        "Successfully wrote {} pages to {}",
        pages.len(),
        args.output.display()
    );

    Ok(())
}
