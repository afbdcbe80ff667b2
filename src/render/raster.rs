//! Raster backend: replays recorded draw ops onto a tiny-skia pixmap.
//!
//! Text is rendered from caller-registered font files: each glyph outline is
//! pulled through ttf-parser into a path and filled, so no system font
//! machinery is involved. A label whose family has no registered font is
//! skipped with a warning; the page still renders.

use std::collections::HashSet;
use std::path::Path;

use kurbo::{Affine, BezPath, PathEl};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};
use ttf_parser::{Face, OutlineBuilder};

use crate::error::RenderError;
use crate::layout::units::{page_height_px, PAGE_WIDTH_PX};

use super::canvas::{Canvas, DrawOp, TextAlign, TextStyle};
use super::color::Rgba;

/// Pixel dimensions of one rendered page surface.
pub fn page_pixel_size() -> (u32, u32) {
    (PAGE_WIDTH_PX as u32, page_height_px().round() as u32)
}

/// Registered font files, keyed by rendering family name.
///
/// Lookup falls back to the first registered font so a single `--font`
/// registration covers the glyph, pinyin, and footer families at once.
#[derive(Default)]
pub struct FontStore {
    fonts: Vec<(String, Vec<u8>)>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register font bytes under a family name, validating that they parse.
    pub fn register(&mut self, family: impl Into<String>, data: Vec<u8>) -> Result<(), RenderError> {
        let family = family.into();
        Face::parse(&data, 0)
            .map_err(|e| RenderError::FontLoad(format!("{family}: {e}")))?;
        self.fonts.push((family, data));
        Ok(())
    }

    /// Register a font file under a family name.
    pub fn register_file(
        &mut self,
        family: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let data = std::fs::read(path.as_ref())?;
        self.register(family, data)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn lookup(&self, family: &str) -> Option<&[u8]> {
        self.fonts
            .iter()
            .find(|(name, _)| name == family)
            .or_else(|| self.fonts.first())
            .map(|(_, data)| data.as_slice())
    }
}

/// Replay a page's recorded ops onto a fresh pixmap.
pub fn rasterize(canvas: &Canvas, fonts: &FontStore) -> Result<Pixmap, RenderError> {
    let (width, height) = page_pixel_size();
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
    let mut missing_families = HashSet::new();

    for op in canvas.ops() {
        match op {
            DrawOp::Clear { color } => pixmap.fill(to_sk_color(*color)),
            DrawOp::StrokeRect {
                x,
                y,
                width,
                height,
                color,
                line_width,
            } => {
                if let Some(rect) = tiny_skia::Rect::from_xywh(*x, *y, *width, *height) {
                    let path = PathBuilder::from_rect(rect);
                    let stroke = Stroke {
                        width: *line_width,
                        ..Stroke::default()
                    };
                    pixmap.stroke_path(
                        &path,
                        &paint(*color),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                line_width,
                dash,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(*x1, *y1);
                pb.line_to(*x2, *y2);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width: *line_width,
                        dash: dash.and_then(|(on, off)| StrokeDash::new(vec![on, off], 0.0)),
                        ..Stroke::default()
                    };
                    pixmap.stroke_path(
                        &path,
                        &paint(*color),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawOp::FillPath { path, color } => {
                if let Some(path) = bez_to_skia(path) {
                    pixmap.fill_path(
                        &path,
                        &paint(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawOp::Text {
                text,
                x,
                y,
                width,
                height,
                style,
            } => {
                draw_text(
                    &mut pixmap,
                    fonts,
                    text,
                    (*x, *y, *width, *height),
                    style,
                    &mut missing_families,
                );
            }
        }
    }

    Ok(pixmap)
}

/// Encode a rendered page as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut p = Paint::default();
    p.set_color(to_sk_color(color));
    p.anti_alias = true;
    p
}

fn to_sk_color(color: Rgba) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(
        color.r.clamp(0.0, 1.0),
        color.g.clamp(0.0, 1.0),
        color.b.clamp(0.0, 1.0),
        color.a.clamp(0.0, 1.0),
    )
    .unwrap_or_else(|| tiny_skia::Color::from_rgba8(0, 0, 0, 255))
}

fn bez_to_skia(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p) => pb.quad_to(p1.x as f32, p1.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(p1, p2, p) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Collects a glyph outline as a path in font units (y-up).
struct GlyphOutline {
    path: BezPath,
}

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path
            .quad_to((x1 as f64, y1 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            (x1 as f64, y1 as f64),
            (x2 as f64, y2 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Draw one label into its box: aligned horizontally, baseline centered
/// vertically on the em box, shifted by the style's `dy`.
fn draw_text(
    pixmap: &mut Pixmap,
    fonts: &FontStore,
    text: &str,
    (x, y, width, height): (f32, f32, f32, f32),
    style: &TextStyle,
    missing_families: &mut HashSet<String>,
) {
    let Some(data) = fonts.lookup(&style.family) else {
        if missing_families.insert(style.family.clone()) {
            log::warn!("No font registered for family '{}', labels skipped", style.family);
        }
        return;
    };
    let Ok(face) = Face::parse(data, 0) else {
        return;
    };

    let scale = style.size / face.units_per_em() as f32;

    // Shape-free layout: one glyph per char, advanced by its metric width.
    let mut glyphs = Vec::new();
    let mut total_advance = 0.0f32;
    for ch in text.chars() {
        let Some(glyph) = face.glyph_index(ch) else {
            log::warn!("Font '{}' has no glyph for '{}'", style.family, ch);
            continue;
        };
        let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        glyphs.push((glyph, advance));
        total_advance += advance;
    }
    if glyphs.is_empty() {
        return;
    }

    let mut pen_x = match style.align {
        TextAlign::Left => x,
        TextAlign::Center => x + (width - total_advance) / 2.0,
        TextAlign::Right => x + width - total_advance,
    };

    let ascent = face.ascender() as f32 * scale;
    let descent = -face.descender() as f32 * scale;
    let baseline = y + height / 2.0 + (ascent - descent) / 2.0 + style.dy;

    let mut combined = BezPath::new();
    for (glyph, advance) in glyphs {
        let mut outline = GlyphOutline {
            path: BezPath::new(),
        };
        if face.outline_glyph(glyph, &mut outline).is_some() {
            // Font units are y-up; flip onto the page while scaling.
            outline.path.apply_affine(Affine::new([
                scale as f64,
                0.0,
                0.0,
                -(scale as f64),
                pen_x as f64,
                baseline as f64,
            ]));
            combined.extend(outline.path);
        }
        pen_x += advance;
    }

    if let Some(path) = bez_to_skia(&combined) {
        pixmap.fill_path(
            &path,
            &paint(style.color.faded(style.opacity)),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
