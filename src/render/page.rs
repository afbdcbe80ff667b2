//! Page layout driver: draws one page's bands, rows, and cells in order.

use crate::config::Settings;
use crate::layout::units::{mm_to_px, page_height_px, PAGE_WIDTH_PX};
use crate::layout::PageGeometry;
use crate::model::{CharacterData, Page, StrokeCache};

use super::canvas::{Canvas, TextAlign, TextStyle};
use super::color::{Rgba, BLACK, PINYIN_TRACE, WHITE};
use super::grid::{draw_cell, CellPattern};
use super::stroke_order::draw_stroke_band;
use super::text::{draw_label, glyph_style};

/// Pinyin label size as a fraction of the cell width.
const PINYIN_SIZE_RATIO: f32 = 0.4;

/// Page-number footer size in logical pixels.
const FOOTER_SIZE: f32 = 12.0;

/// Renders one page of the document onto a canvas.
pub struct PageRenderer<'a> {
    settings: &'a Settings,
    geom: PageGeometry,
}

impl<'a> PageRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            geom: PageGeometry::new(settings),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geom
    }

    /// Draw the full page: character rows in order, blank fill rows up to the
    /// centered block's footprint, then the footer.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        characters: &[CharacterData],
        page: &Page,
        strokes: &StrokeCache,
    ) {
        canvas.clear(WHITE);

        let on_page = page.slice(characters);
        for (row, character) in on_page.iter().enumerate() {
            self.draw_row(canvas, self.geom.row_top(row), Some(character), strokes);
            if self.geom.insert_empty_row {
                self.draw_row(canvas, self.geom.empty_row_top(row), None, strokes);
            }
        }

        // Blank fill preserves the centered block's total footprint.
        for row in on_page.len()..self.geom.rows_per_page {
            self.draw_row(canvas, self.geom.row_top(row), None, strokes);
            if self.geom.insert_empty_row {
                self.draw_row(canvas, self.geom.empty_row_top(row), None, strokes);
            }
        }

        if self.settings.show_page_number {
            self.draw_footer(canvas, page);
        }
    }

    /// One block: stroke band, pinyin band, then the main grid row, advancing
    /// the cursor by each band's height. `None` draws the same bands with no
    /// character data.
    fn draw_row(
        &self,
        canvas: &mut Canvas,
        top: f32,
        character: Option<&CharacterData>,
        strokes: &StrokeCache,
    ) {
        let mut y = top;
        if self.settings.show_stroke {
            self.draw_stroke_row(canvas, y, character, strokes);
            y += self.geom.stroke_height();
        }
        if self.settings.show_pinyin {
            self.draw_pinyin_row(canvas, y, character);
            y += self.geom.pinyin_height();
        }
        self.draw_main_row(canvas, y, character);
    }

    fn draw_stroke_row(
        &self,
        canvas: &mut Canvas,
        y: f32,
        character: Option<&CharacterData>,
        strokes: &StrokeCache,
    ) {
        let paths = character.and_then(|c| strokes.get(&c.ch)).map(Vec::as_slice);
        draw_stroke_band(
            canvas,
            self.geom.origin_x,
            y,
            self.geom.stroke_step(),
            self.geom.stroke_steps(),
            paths,
            self.line_color(),
        );
    }

    fn draw_pinyin_row(&self, canvas: &mut Canvas, y: f32, character: Option<&CharacterData>) {
        let cell = self.geom.cell;
        for col in 0..self.geom.max_cells {
            let x = self.geom.cell_x(col);
            draw_cell(
                canvas,
                x,
                y,
                cell,
                cell * 0.5,
                CellPattern::Pinyin,
                self.line_color(),
            );

            let Some(character) = character else { continue };
            if character.selected_pinyin.is_empty() {
                continue;
            }
            let color = if col == 0 {
                BLACK
            } else if self.trace_at(col) {
                PINYIN_TRACE
            } else {
                continue;
            };
            draw_label(
                canvas,
                &character.selected_pinyin,
                x,
                y,
                cell,
                cell * 0.5,
                pinyin_style(cell, color),
            );
        }
    }

    fn draw_main_row(&self, canvas: &mut Canvas, y: f32, character: Option<&CharacterData>) {
        let cell = self.geom.cell;
        let pattern = CellPattern::from(self.settings.grid_style);
        let trace_color = Rgba::from_rgb(self.settings.trace_color);

        for col in 0..self.geom.max_cells {
            let x = self.geom.cell_x(col);
            draw_cell(canvas, x, y, cell, cell, pattern, self.line_color());

            let Some(character) = character else { continue };
            let color = if col == 0 {
                if self.settings.highlight_first {
                    BLACK
                } else {
                    trace_color
                }
            } else if self.trace_at(col) {
                trace_color
            } else {
                continue;
            };
            draw_label(
                canvas,
                &character.ch.to_string(),
                x,
                y,
                cell,
                cell,
                glyph_style(self.settings, cell, color),
            );
        }
    }

    /// Whether column `col` carries a trace glyph. With empty-column
    /// insertion, traces occupy every other column so repetitions are
    /// visually separated.
    fn trace_at(&self, col: usize) -> bool {
        if col == 0 {
            return false;
        }
        if self.settings.insert_empty_col {
            col % 2 == 1 && (col + 1) / 2 <= self.settings.trace_count
        } else {
            col <= self.settings.trace_count
        }
    }

    /// Centered "- page / total -" label in the bottom margin band.
    fn draw_footer(&self, canvas: &mut Canvas, page: &Page) {
        let band = mm_to_px(self.settings.margin_bottom_mm);
        if band <= 0.0 {
            return;
        }
        let style = TextStyle {
            family: "serif".to_string(),
            bold: false,
            size: FOOTER_SIZE.min(band * 0.8),
            color: BLACK,
            opacity: 1.0,
            align: TextAlign::Center,
            dy: 0.0,
        };
        draw_label(
            canvas,
            &format!("- {} / {} -", page.number, page.total),
            0.0,
            page_height_px() - band,
            PAGE_WIDTH_PX,
            band,
            style,
        );
    }

    fn line_color(&self) -> Rgba {
        Rgba::from_rgb(self.settings.line_color)
    }
}

fn pinyin_style(cell: f32, color: Rgba) -> TextStyle {
    TextStyle {
        family: "serif".to_string(),
        bold: false,
        size: cell * PINYIN_SIZE_RATIO,
        color,
        opacity: 1.0,
        align: TextAlign::Center,
        dy: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate;
    use crate::model::parse_text;
    use crate::render::canvas::DrawOp;

    fn texts(canvas: &Canvas) -> Vec<(String, f32, f32)> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    fn render_one(settings: &Settings, input: &str) -> (Canvas, Vec<Page>, Vec<CharacterData>) {
        let chars = parse_text(input);
        let pages = paginate(&chars, settings);
        let mut canvas = Canvas::new();
        PageRenderer::new(settings).render(&mut canvas, &chars, &pages[0], &StrokeCache::new());
        (canvas, pages, chars)
    }

    #[test]
    fn test_first_op_clears_to_white() {
        let (canvas, _, _) = render_one(&Settings::default(), "你");
        assert!(matches!(
            canvas.ops()[0],
            DrawOp::Clear { color } if color == WHITE
        ));
    }

    #[test]
    fn test_head_and_trace_glyphs_per_row() {
        let settings = Settings {
            show_page_number: false,
            show_pinyin: false,
            show_stroke: false,
            ..Settings::default()
        };
        let (canvas, _, _) = render_one(&settings, "你");
        let glyphs = texts(&canvas);
        // 1 head + 2 traces, blank cells bear no glyph.
        assert_eq!(glyphs.len(), 3);
        assert!(glyphs.iter().all(|(t, _, _)| t == "你"));
    }

    #[test]
    fn test_empty_col_separates_traces() {
        let settings = Settings {
            insert_empty_col: true,
            show_page_number: false,
            show_pinyin: false,
            show_stroke: false,
            ..Settings::default()
        };
        let (canvas, _, _) = render_one(&settings, "你");
        let geom = PageGeometry::new(&settings);
        let glyphs = texts(&canvas);
        assert_eq!(glyphs.len(), 3);
        // Traces land in columns 1 and 3, leaving column 2 empty.
        let cols: Vec<usize> = glyphs
            .iter()
            .map(|(_, x, _)| ((x - geom.origin_x) / geom.cell).round() as usize)
            .collect();
        assert_eq!(cols, vec![0, 1, 3]);
    }

    #[test]
    fn test_pinyin_row_labels_head_and_traces() {
        let settings = Settings {
            show_page_number: false,
            show_stroke: false,
            ..Settings::default()
        };
        let (canvas, _, chars) = render_one(&settings, "你");
        let glyphs = texts(&canvas);
        let pinyin_labels = glyphs
            .iter()
            .filter(|(t, _, _)| t == &chars[0].selected_pinyin)
            .count();
        // Head + 2 trace cells carry the reading.
        assert_eq!(pinyin_labels, 3);
    }

    #[test]
    fn test_blank_fill_rows_complete_the_grid() {
        let settings = Settings {
            show_page_number: false,
            show_pinyin: false,
            show_stroke: false,
            ..Settings::default()
        };
        let geom = PageGeometry::new(&settings);
        let (canvas, _, _) = render_one(&settings, "你你");
        let borders = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .count();
        // Every row slot is drawn, characters or not.
        assert_eq!(borders, geom.rows_per_page * geom.max_cells);
    }

    #[test]
    fn test_empty_row_mirrors_each_content_row() {
        let settings = Settings {
            insert_empty_row: true,
            show_page_number: false,
            show_pinyin: false,
            show_stroke: false,
            ..Settings::default()
        };
        let geom = PageGeometry::new(&settings);
        let (canvas, _, _) = render_one(&settings, "你");
        // The blank mirror row draws its cells one block below the content row.
        let ys: Vec<f32> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRect { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        let first_row = geom.row_top(0);
        assert!(ys.iter().any(|y| (*y - first_row).abs() < 1e-3));
        assert!(ys
            .iter()
            .any(|y| (*y - (first_row + geom.block_height)).abs() < 1e-3));
    }

    #[test]
    fn test_footer_shows_page_of_total() {
        let (canvas, pages, _) = render_one(&Settings::default(), "你好世");
        assert_eq!(pages.len(), 1);
        let glyphs = texts(&canvas);
        assert!(glyphs.iter().any(|(t, _, _)| t == "- 1 / 1 -"));
    }

    #[test]
    fn test_no_footer_when_disabled() {
        let settings = Settings {
            show_page_number: false,
            ..Settings::default()
        };
        let (canvas, _, _) = render_one(&settings, "你");
        assert!(!texts(&canvas).iter().any(|(t, _, _)| t.starts_with("- ")));
    }

    #[test]
    fn test_scenario_default_row_structure() {
        // Defaults: stroke band, pinyin band, and a main row of
        // 1 head + 2 traces + blank fill per character.
        let settings = Settings {
            show_page_number: false,
            ..Settings::default()
        };
        let geom = PageGeometry::new(&settings);
        let (canvas, pages, _) = render_one(&settings, "你好世");
        assert_eq!(pages[0].len(), 3);

        let rects = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .count();
        // Per row slot: stroke steps + pinyin cells + main cells.
        let per_row = geom.stroke_steps() + 2 * geom.max_cells;
        assert_eq!(rects, geom.rows_per_page * per_row);
    }
}
