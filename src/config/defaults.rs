/// Default grid cell size in mm
pub const DEFAULT_GRID_SIZE: f32 = 17.0;

/// Default row spacing in mm
pub const DEFAULT_ROW_SPACING: f32 = 2.0;

/// Default page margin in mm (all four sides)
pub const DEFAULT_PAGE_MARGIN: f32 = 10.0;

/// Default number of trace cells after the head cell
pub const DEFAULT_TRACE_COUNT: usize = 2;

/// Default glyph size as a percentage of the cell width
pub const DEFAULT_FONT_SIZE_PCT: f32 = 75.0;

/// Default glyph font family (alias, resolved by the text renderer)
pub const DEFAULT_FONT_FAMILY: &str = "楷体";

/// RGB color for trace glyphs (#97a3b6)
pub const TRACE_COLOR: (f32, f32, f32) = (0.592, 0.639, 0.714);

/// RGB color for grid lines (#677489)
pub const LINE_COLOR: (f32, f32, f32) = (0.404, 0.455, 0.537);

/// Upper bound for the glyph size percentage
pub const MAX_FONT_SIZE_PCT: f32 = 100.0;

/// Bound for the vertical offset percentage (symmetric)
pub const MAX_VERTICAL_OFFSET_PCT: f32 = 100.0;
