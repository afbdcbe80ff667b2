//! Shared page geometry.
//!
//! Every pixel position on a page is derived here, once, from the settings.
//! Both the drawing pass and the interactive overlay mapper consume this
//! table, so the drawn pinyin cells and their hit regions agree exactly.

use crate::config::Settings;

use super::units::{mm_to_px, page_height_px};

/// An axis-aligned rectangle in logical page pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale into a differently-sized coordinate space, per axis.
    pub fn scaled(&self, sx: f32, sy: f32) -> Rect {
        Rect {
            x: self.x * sx,
            y: self.y * sy,
            width: self.width * sx,
            height: self.height * sy,
        }
    }
}

/// Per-render derived geometry, a pure function of the settings.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    /// Main grid cell side in px.
    pub cell: f32,
    /// Row spacing below each block in px.
    pub row_spacing: f32,
    /// Height of one character's stack: bands + main row + spacing.
    pub block_height: f32,
    /// Height one character consumes on the page; `block_height`, doubled
    /// when a blank row is inserted after every content row.
    pub row_unit_height: f32,
    /// Cells that fit in one row between the margins.
    pub max_cells: usize,
    /// Row units that fit between the margins (at least 1).
    pub rows_per_page: usize,
    /// Left edge of column 0, including the horizontal centering offset.
    pub origin_x: f32,
    /// Top edge of row 0, including the vertical centering offset.
    pub origin_y: f32,
    /// Content width between the margins in px.
    pub content_width: f32,
    /// Available height between the margins in px; the pagination budget.
    pub avail_height: f32,

    show_stroke: bool,
    show_pinyin: bool,
    /// Whether each content row is mirrored by a blank row.
    pub insert_empty_row: bool,
}

impl PageGeometry {
    pub fn new(settings: &Settings) -> Self {
        let cell = mm_to_px(settings.grid_size_mm);
        let row_spacing = mm_to_px(settings.row_spacing_mm);
        let content_width = mm_to_px(settings.content_width_mm());
        let avail_height = page_height_px()
            - mm_to_px(settings.margin_top_mm)
            - mm_to_px(settings.margin_bottom_mm);

        // Pinyin and stroke bands are each half a cell tall.
        let mut block_height = cell;
        if settings.show_pinyin {
            block_height += cell * 0.5;
        }
        if settings.show_stroke {
            block_height += cell * 0.5;
        }
        block_height += row_spacing;

        let row_unit_height = if settings.insert_empty_row {
            block_height * 2.0
        } else {
            block_height
        };

        let max_cells = if cell > 0.0 {
            (content_width / cell).floor().max(0.0) as usize
        } else {
            0
        };

        let rows_per_page = if row_unit_height > 0.0 {
            ((avail_height / row_unit_height).floor() as usize).max(1)
        } else {
            1
        };

        // Center the cell row and the row block within the content area.
        let h_offset = ((content_width - max_cells as f32 * cell) / 2.0).max(0.0);
        let v_offset =
            ((avail_height - rows_per_page as f32 * row_unit_height) / 2.0).max(0.0);

        Self {
            cell,
            row_spacing,
            block_height,
            row_unit_height,
            max_cells,
            rows_per_page,
            origin_x: mm_to_px(settings.margin_left_mm) + h_offset,
            origin_y: mm_to_px(settings.margin_top_mm) + v_offset,
            content_width,
            avail_height,
            show_stroke: settings.show_stroke,
            show_pinyin: settings.show_pinyin,
            insert_empty_row: settings.insert_empty_row,
        }
    }

    /// Stroke band height, 0 when the band is hidden.
    pub fn stroke_height(&self) -> f32 {
        if self.show_stroke {
            self.cell * 0.5
        } else {
            0.0
        }
    }

    /// Pinyin band height, 0 when the band is hidden.
    pub fn pinyin_height(&self) -> f32 {
        if self.show_pinyin {
            self.cell * 0.5
        } else {
            0.0
        }
    }

    /// Side of one stroke-diagram step cell; two steps span one grid cell.
    pub fn stroke_step(&self) -> f32 {
        self.cell * 0.5
    }

    /// Number of stroke-diagram steps, filling exactly one grid row of width.
    pub fn stroke_steps(&self) -> usize {
        self.max_cells * 2
    }

    /// Top edge of row unit `row`.
    pub fn row_top(&self, row: usize) -> f32 {
        self.origin_y + row as f32 * self.row_unit_height
    }

    /// Top edge of the blank mirror row inside row unit `row`.
    pub fn empty_row_top(&self, row: usize) -> f32 {
        self.row_top(row) + self.block_height
    }

    /// Left edge of column `col`.
    pub fn cell_x(&self, col: usize) -> f32 {
        self.origin_x + col as f32 * self.cell
    }

    /// Main grid cell rectangle at (row, col).
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.cell_x(col),
            self.row_top(row) + self.stroke_height() + self.pinyin_height(),
            self.cell,
            self.cell,
        )
    }

    /// Pinyin band cell rectangle at (row, col). Meaningful only when the
    /// pinyin band is shown.
    pub fn pinyin_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.cell_x(col),
            self.row_top(row) + self.stroke_height(),
            self.cell,
            self.cell * 0.5,
        )
    }
}
