//! Physical-unit conversion for the fixed A4 target page.
//!
//! All horizontal and vertical conversions share one ratio derived from the
//! logical page width; there is no separate vertical DPI. The page size is a
//! design constant, not a setting.

/// Physical page width in mm (A4 portrait).
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// Physical page height in mm (A4 portrait).
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Logical page width in device pixels (A4 width at the reference resolution).
pub const PAGE_WIDTH_PX: f32 = 794.0;

/// Convert a physical length in mm to logical page pixels.
pub fn mm_to_px(mm: f32) -> f32 {
    (PAGE_WIDTH_PX / PAGE_WIDTH_MM) * mm
}

/// Logical page height in pixels, derived from the same ratio.
pub fn page_height_px() -> f32 {
    mm_to_px(PAGE_HEIGHT_MM)
}
