//! Grid pattern renderer: one practice cell's border and internal guides.

use crate::cli::GridStyle;

use super::canvas::Canvas;
use super::color::Rgba;

/// Dash pattern for internal guide lines, in device pixels.
const GUIDE_DASH: (f32, f32) = (4.0, 2.0);

/// Line widths: solid border and dashed internal guides.
const BORDER_WIDTH: f32 = 1.0;
const GUIDE_WIDTH: f32 = 0.5;

/// Pattern drawn inside one cell. Extends the user-facing grid styles with
/// the two internal variants: the four-line pinyin guide and the plain
/// bordered placeholder used by stroke-diagram cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPattern {
    Tian,
    Mi,
    Hui,
    Plain,
    Pinyin,
    Rect,
}

impl From<GridStyle> for CellPattern {
    fn from(style: GridStyle) -> Self {
        match style {
            GridStyle::Tian => CellPattern::Tian,
            GridStyle::Mi => CellPattern::Mi,
            GridStyle::Hui => CellPattern::Hui,
            GridStyle::None => CellPattern::Plain,
        }
    }
}

/// Draw one cell: a solid border for every pattern, then the pattern's
/// internal guide lines as dashed strokes on top of whatever is already in
/// the rectangle. No fill.
pub fn draw_cell(
    canvas: &mut Canvas,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    pattern: CellPattern,
    line_color: Rgba,
) {
    canvas.stroke_rect(x, y, width, height, line_color, BORDER_WIDTH);

    let mut guide = |x1: f32, y1: f32, x2: f32, y2: f32| {
        canvas.dashed_line(x1, y1, x2, y2, line_color, GUIDE_WIDTH, GUIDE_DASH);
    };

    match pattern {
        CellPattern::Tian => {
            guide(x, y + height / 2.0, x + width, y + height / 2.0);
            guide(x + width / 2.0, y, x + width / 2.0, y + height);
        }
        CellPattern::Mi => {
            guide(x, y + height / 2.0, x + width, y + height / 2.0);
            guide(x + width / 2.0, y, x + width / 2.0, y + height);
            guide(x, y, x + width, y + height);
            guide(x + width, y, x, y + height);
        }
        CellPattern::Hui => {
            // Inset rectangle at 25%-75% of each axis.
            let ix = width * 0.25;
            let iy = height * 0.25;
            let (left, top) = (x + ix, y + iy);
            let (right, bottom) = (x + width - ix, y + height - iy);
            guide(left, top, right, top);
            guide(right, top, right, bottom);
            guide(right, bottom, left, bottom);
            guide(left, bottom, left, top);
        }
        CellPattern::Pinyin => {
            // Four-line guide: two internal lines at thirds.
            let third = height / 3.0;
            guide(x, y + third, x + width, y + third);
            guide(x, y + third * 2.0, x + width, y + third * 2.0);
        }
        CellPattern::Plain | CellPattern::Rect => {}
    }
}
