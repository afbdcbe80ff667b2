//! Progressive stroke-order diagram for one character.
//!
//! The band shows a fixed number of step cells (two per main grid cell, so it
//! always spans exactly one grid row of width). Step `s` shows the first `s`
//! strokes muted and stroke `s` emphasized; steps past the character's stroke
//! count stay as bare placeholders, which is how a short character is visibly
//! "finished" partway along the band.

use kurbo::{Affine, BezPath};

use super::canvas::Canvas;
use super::color::{Rgba, STROKE_EMPHASIS, STROKE_MUTED};
use super::grid::{draw_cell, CellPattern};

/// Side of the square coordinate space hanzi-writer stroke data is authored
/// in (font units, y-up).
const STROKE_EM: f64 = 1024.0;

/// Inset between the step cell border and the glyph, in device pixels.
const STEP_PADDING: f64 = 2.0;

/// Draw the stroke band for one character starting at (x, y).
///
/// `steps` placeholder cells of side `step` are always drawn; stroke overlays
/// appear only where data exists. `strokes` of `None` (no data for this
/// character) degrades to placeholders only.
#[allow(clippy::too_many_arguments)]
pub fn draw_stroke_band(
    canvas: &mut Canvas,
    x: f32,
    y: f32,
    step: f32,
    steps: usize,
    strokes: Option<&[BezPath]>,
    line_color: Rgba,
) {
    for s in 0..steps {
        let sx = x + s as f32 * step;
        draw_cell(canvas, sx, y, step, step, CellPattern::Rect, line_color);

        let Some(strokes) = strokes else { continue };
        if s >= strokes.len() {
            continue;
        }

        let transform = cell_transform(sx, y, step);
        for (i, stroke) in strokes.iter().take(s + 1).enumerate() {
            let color = if i == s { STROKE_EMPHASIS } else { STROKE_MUTED };
            let mut path = stroke.clone();
            path.apply_affine(transform);
            canvas.fill_path(path, color);
        }
    }
}

/// Map the stroke data's 1024-unit, y-up space into a step cell at (x, y).
///
/// Scale to fit inside the padding inset and flip the vertical axis: stroke
/// data grows upward while the page surface grows downward. A render against
/// a new backend should be checked for right-side-up output here first.
fn cell_transform(x: f32, y: f32, size: f32) -> Affine {
    let scale = (size as f64 - 2.0 * STEP_PADDING) / STROKE_EM;
    Affine::new([
        scale,
        0.0,
        0.0,
        -scale,
        x as f64 + STEP_PADDING,
        y as f64 + size as f64 - STEP_PADDING,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::DrawOp;
    use crate::render::color::BLACK;
    use kurbo::Shape;

    fn stroke(svg: &str) -> BezPath {
        BezPath::from_svg(svg).unwrap()
    }

    fn fills(canvas: &Canvas) -> Vec<(BezPath, Rgba)> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillPath { path, color } => Some((path.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    fn placeholders(canvas: &Canvas) -> usize {
        canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .count()
    }

    #[test]
    fn test_band_without_data_draws_placeholders_only() {
        let mut canvas = Canvas::new();
        draw_stroke_band(&mut canvas, 0.0, 0.0, 32.0, 16, None, BLACK);
        assert_eq!(placeholders(&canvas), 16);
        assert!(fills(&canvas).is_empty());
    }

    #[test]
    fn test_progressive_reveal_counts() {
        let strokes = vec![
            stroke("M 0 0 L 1000 0 L 1000 100 Z"),
            stroke("M 0 200 L 1000 200 L 1000 300 Z"),
        ];
        let mut canvas = Canvas::new();
        draw_stroke_band(&mut canvas, 0.0, 0.0, 32.0, 8, Some(&strokes), BLACK);

        // Step 0 fills 1 stroke, step 1 fills 2; steps 2..8 are placeholders.
        assert_eq!(placeholders(&canvas), 8);
        assert_eq!(fills(&canvas).len(), 3);
    }

    #[test]
    fn test_current_stroke_is_emphasized_and_history_muted() {
        let strokes = vec![
            stroke("M 0 0 L 1000 0 L 1000 100 Z"),
            stroke("M 0 200 L 1000 200 L 1000 300 Z"),
        ];
        let mut canvas = Canvas::new();
        draw_stroke_band(&mut canvas, 0.0, 0.0, 32.0, 2, Some(&strokes), BLACK);

        let fills = fills(&canvas);
        // Step 0: current stroke red. Step 1: history gray then current red.
        assert_eq!(fills[0].1, STROKE_EMPHASIS);
        assert_eq!(fills[1].1, STROKE_MUTED);
        assert_eq!(fills[2].1, STROKE_EMPHASIS);
    }

    #[test]
    fn test_transform_flips_vertically_and_fits_cell() {
        let strokes = vec![stroke("M 0 0 L 1024 0 L 1024 1024 L 0 1024 Z")];
        let mut canvas = Canvas::new();
        draw_stroke_band(&mut canvas, 100.0, 50.0, 32.0, 1, Some(&strokes), BLACK);

        let (path, _) = fills(&canvas).remove(0);
        let bbox = path.bounding_box();
        // The full em square lands inside the padded cell.
        assert!(bbox.x0 >= 100.0 + 1.9 && bbox.x1 <= 132.0 - 1.9);
        assert!(bbox.y0 >= 50.0 + 1.9 && bbox.y1 <= 82.0 - 1.9);
        // y-up data: em-space y=0 maps to the cell bottom.
        assert!((bbox.y1 - (50.0 + 32.0 - 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_band_width_is_steps_times_step() {
        let mut canvas = Canvas::new();
        draw_stroke_band(&mut canvas, 0.0, 0.0, 30.0, 4, None, BLACK);
        let last = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRect { x, width, .. } => Some(x + width),
                _ => None,
            })
            .fold(0.0f32, f32::max);
        assert!((last - 120.0).abs() < 1e-3);
    }
}
