//! Glyph renderer: one text label placed inside a box.

use crate::cli::FontWeight;
use crate::config::Settings;

use super::canvas::{Canvas, TextAlign, TextStyle};
use super::color::Rgba;

/// Default label size as a fraction of the box width.
const DEFAULT_SIZE_RATIO: f32 = 0.75;

/// Map the user-facing stylistic family names onto the rendering family
/// registered with the font store. Unknown names pass through unchanged so a
/// caller can register any family directly.
pub fn resolve_family(name: &str) -> &str {
    match name.trim() {
        "楷体" | "kai" => "KaiTi",
        "宋体" | "song" => "SimSun",
        "仿宋" | "fangsong" => "FangSong",
        "黑体" | "hei" => "SimHei",
        other => other,
    }
}

/// Style for a label derived from nothing but the box: black, centered,
/// opaque, serif, sized to 75% of the box width.
pub fn label_style(box_width: f32) -> TextStyle {
    TextStyle {
        family: "serif".to_string(),
        bold: false,
        size: box_width * DEFAULT_SIZE_RATIO,
        color: super::color::BLACK,
        opacity: 1.0,
        align: TextAlign::Center,
        dy: 0.0,
    }
}

/// Style for a practice glyph in a main grid cell, honoring the settings'
/// family, weight, size percentage, and vertical offset.
pub fn glyph_style(settings: &Settings, cell: f32, color: Rgba) -> TextStyle {
    TextStyle {
        family: resolve_family(&settings.font_family).to_string(),
        bold: settings.font_weight == FontWeight::Bold,
        size: cell * settings.font_size_pct / 100.0,
        color,
        opacity: 1.0,
        align: TextAlign::Center,
        dy: cell * settings.vertical_offset_pct / 100.0,
    }
}

/// Draw one label centered (or aligned) in the box. Empty text draws nothing.
pub fn draw_label(
    canvas: &mut Canvas,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    style: TextStyle,
) {
    canvas.text(text, x, y, width, height, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::DrawOp;

    #[test]
    fn test_family_aliases() {
        assert_eq!(resolve_family("楷体"), "KaiTi");
        assert_eq!(resolve_family("宋体"), "SimSun");
        assert_eq!(resolve_family("Noto Serif CJK SC"), "Noto Serif CJK SC");
    }

    #[test]
    fn test_default_size_is_three_quarters_of_width() {
        let style = label_style(64.0);
        assert!((style.size - 48.0).abs() < 1e-3);
        assert_eq!(style.align, TextAlign::Center);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_glyph_style_uses_settings() {
        let settings = Settings {
            font_size_pct: 50.0,
            vertical_offset_pct: 10.0,
            font_weight: FontWeight::Bold,
            ..Settings::default()
        };
        let style = glyph_style(&settings, 60.0, super::super::color::BLACK);
        assert!((style.size - 30.0).abs() < 1e-3);
        assert!((style.dy - 6.0).abs() < 1e-3);
        assert!(style.bold);
        assert_eq!(style.family, "KaiTi");
    }

    #[test]
    fn test_empty_label_records_nothing() {
        let mut canvas = Canvas::new();
        draw_label(&mut canvas, "", 0.0, 0.0, 10.0, 10.0, label_style(10.0));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_label_records_box_and_text() {
        let mut canvas = Canvas::new();
        draw_label(&mut canvas, "nǐ", 5.0, 6.0, 70.0, 35.0, label_style(70.0));
        match &canvas.ops()[0] {
            DrawOp::Text {
                text, x, y, width, ..
            } => {
                assert_eq!(text, "nǐ");
                assert_eq!((*x, *y, *width), (5.0, 6.0, 70.0));
            }
            other => panic!("unexpected op: {:?}", other),
        }
    }
}
