use crate::cli::{parse_color, parse_margins, Args, FontWeight, GridStyle};
use crate::error::ConfigError;

use super::defaults::*;

/// Runtime settings for one render pass.
///
/// A plain value owned by the caller: layout and rendering are pure functions
/// of a `Settings` plus the character list, so re-rendering after a change is
/// just re-invocation with a new value.
#[derive(Debug, Clone)]
pub struct Settings {
    // Display options
    pub show_stroke: bool,
    pub show_pinyin: bool,
    pub highlight_first: bool,
    pub insert_empty_row: bool,
    pub insert_empty_col: bool,
    pub show_page_number: bool,

    // Grid
    pub grid_style: GridStyle,
    pub grid_size_mm: f32,
    pub row_spacing_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,

    // Glyph typography
    pub font_family: String,
    pub font_weight: FontWeight,
    /// Glyph size as a percentage of the cell width (0-100)
    pub font_size_pct: f32,
    /// Baseline shift as a percentage of the cell height (-100 to 100)
    pub vertical_offset_pct: f32,

    // Trace cells
    pub trace_count: usize,

    // Colors (RGB 0.0-1.0)
    pub trace_color: (f32, f32, f32),
    pub line_color: (f32, f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_stroke: true,
            show_pinyin: true,
            highlight_first: true,
            insert_empty_row: false,
            insert_empty_col: false,
            show_page_number: true,

            grid_style: GridStyle::Tian,
            grid_size_mm: DEFAULT_GRID_SIZE,
            row_spacing_mm: DEFAULT_ROW_SPACING,
            margin_top_mm: DEFAULT_PAGE_MARGIN,
            margin_right_mm: DEFAULT_PAGE_MARGIN,
            margin_bottom_mm: DEFAULT_PAGE_MARGIN,
            margin_left_mm: DEFAULT_PAGE_MARGIN,

            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: FontWeight::Normal,
            font_size_pct: DEFAULT_FONT_SIZE_PCT,
            vertical_offset_pct: 0.0,

            trace_count: DEFAULT_TRACE_COUNT,

            trace_color: TRACE_COLOR,
            line_color: LINE_COLOR,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let [top, right, bottom, left] = parse_margins(&args.margins)?;

        Ok(Self {
            show_stroke: !args.no_stroke,
            show_pinyin: !args.no_pinyin,
            highlight_first: !args.no_highlight_first,
            insert_empty_row: args.empty_row,
            insert_empty_col: args.empty_col,
            show_page_number: !args.no_page_numbers,

            grid_style: args.grid,
            grid_size_mm: args.grid_size,
            row_spacing_mm: args.row_spacing,
            margin_top_mm: top,
            margin_right_mm: right,
            margin_bottom_mm: bottom,
            margin_left_mm: left,

            font_family: args.font_family.clone(),
            font_weight: args.font_weight,
            font_size_pct: args.font_size,
            vertical_offset_pct: args.vertical_offset,

            trace_count: args.trace_count,

            trace_color: parse_color(&args.trace_color)?,
            line_color: parse_color(&args.line_color)?,
        }
        .sanitized())
    }

    /// Clamp out-of-range fields to their documented bounds.
    ///
    /// Lengths must be non-negative; the font size percentage is bounded to
    /// 0-100 and the vertical offset to -100..100. Each adjustment is logged
    /// so a caller feeding bad values can see what happened.
    pub fn sanitized(mut self) -> Self {
        let mut clamp = |name: &str, value: &mut f32, min: f32, max: f32| {
            let clamped = value.clamp(min, max);
            if clamped != *value {
                log::warn!("{} out of range ({}), clamped to {}", name, value, clamped);
                *value = clamped;
            }
        };

        clamp("grid_size", &mut self.grid_size_mm, 0.0, f32::MAX);
        clamp("row_spacing", &mut self.row_spacing_mm, 0.0, f32::MAX);
        clamp("margin_top", &mut self.margin_top_mm, 0.0, f32::MAX);
        clamp("margin_right", &mut self.margin_right_mm, 0.0, f32::MAX);
        clamp("margin_bottom", &mut self.margin_bottom_mm, 0.0, f32::MAX);
        clamp("margin_left", &mut self.margin_left_mm, 0.0, f32::MAX);
        clamp("font_size", &mut self.font_size_pct, 0.0, MAX_FONT_SIZE_PCT);
        clamp(
            "vertical_offset",
            &mut self.vertical_offset_pct,
            -MAX_VERTICAL_OFFSET_PCT,
            MAX_VERTICAL_OFFSET_PCT,
        );

        self
    }

    /// Usable content width in mm between the left and right margins.
    pub fn content_width_mm(&self) -> f32 {
        crate::layout::units::PAGE_WIDTH_MM - self.margin_left_mm - self.margin_right_mm
    }
}
