//! Op-collecting drawing surface.
//!
//! A `Canvas` records an ordered list of drawing operations for one page.
//! Renderers append ops in program order; a backend (see `raster`) replays
//! them against an actual pixel surface. Keeping the recording separate from
//! the execution lets tests inspect exactly what would be drawn without a
//! raster target or fonts.

use kurbo::BezPath;

use super::color::Rgba;

/// Horizontal alignment for a text label inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Resolved style for one text label.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Rendering family name, already resolved through the alias table.
    pub family: String,
    pub bold: bool,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
    pub align: TextAlign,
    /// Baseline shift in logical pixels (positive moves the glyph down).
    pub dy: f32,
}

/// One recorded drawing operation in logical page coordinates.
///
/// Coordinates are top-left origin, y growing downward, matching the raster
/// surface.
#[derive(Debug, Clone)]
pub enum DrawOp {
    /// Fill the whole surface with a color.
    Clear { color: Rgba },
    /// Stroke a rectangle outline.
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
        line_width: f32,
    },
    /// Stroke a line, optionally dashed (on/off lengths in pixels).
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgba,
        line_width: f32,
        dash: Option<(f32, f32)>,
    },
    /// Fill an arbitrary path already transformed into page coordinates.
    FillPath { path: BezPath, color: Rgba },
    /// Draw a text label inside a box.
    Text {
        text: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: TextStyle,
    },
}

/// A builder that collects drawing operations for one page surface.
#[derive(Default)]
pub struct Canvas {
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Get a reference to the operations (for inspection).
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear { color });
    }

    pub fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
        line_width: f32,
    ) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba, line_width: f32) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
            dash: None,
        });
    }

    pub fn dashed_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgba,
        line_width: f32,
        dash: (f32, f32),
    ) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
            dash: Some(dash),
        });
    }

    pub fn fill_path(&mut self, path: BezPath, color: Rgba) {
        self.ops.push(DrawOp::FillPath { path, color });
    }

    /// Record a text label. Empty strings record nothing.
    pub fn text<S: Into<String>>(
        &mut self,
        text: S,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: TextStyle,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text {
            text,
            x,
            y,
            width,
            height,
            style,
        });
    }
}
