pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

pub use cli::{FontWeight, GridStyle};
pub use config::Settings;
pub use error::{ConfigError, RenderError, StrokeError};
pub use layout::{hit_regions, paginate, HitRegion, PageGeometry};
pub use model::{parse_text, CharacterData, Page, StrokeCache};
pub use render::{rasterize, Canvas, FontStore, PageRenderer};

/// High-level API for rendering a practice document to page images.
///
/// This is the recommended entry point for library consumers. It paginates
/// the characters, draws every page, and rasterizes each one - consumers
/// just provide characters, settings, and whatever stroke data and fonts
/// they have.
///
/// # Arguments
///
/// * `characters` - Parsed characters in practice order (see [`parse_text`])
/// * `settings` - Layout and styling options
/// * `strokes` - Stroke outlines per character; characters without an entry
///   render their stroke band as bare placeholders
/// * `fonts` - Registered font files; labels with no matching font are skipped
///
/// # Returns
///
/// One pixmap per page, or a RenderError on failure.
///
/// # Example
///
/// ```no_run
/// use copybook::{parse_text, render_pages, FontStore, Settings, StrokeCache};
///
/// let characters = parse_text("你好");
/// let mut fonts = FontStore::new();
/// fonts.register_file("KaiTi", "kaiti.ttf").unwrap();
///
/// let pages = render_pages(
///     &characters,
///     &Settings::default(),
///     &StrokeCache::new(),
///     &fonts,
/// )
/// .unwrap();
///
/// for (i, page) in pages.iter().enumerate() {
///     page.save_png(format!("page-{}.png", i + 1)).unwrap();
/// }
/// ```
pub fn render_pages(
    characters: &[CharacterData],
    settings: &Settings,
    strokes: &StrokeCache,
    fonts: &FontStore,
) -> Result<Vec<tiny_skia::Pixmap>, RenderError> {
    let renderer = PageRenderer::new(settings);
    paginate(characters, settings)
        .iter()
        .map(|page| {
            let mut canvas = Canvas::new();
            renderer.render(&mut canvas, characters, page, strokes);
            rasterize(&canvas, fonts)
        })
        .collect()
}
